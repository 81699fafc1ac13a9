//! Start-up configuration for a session
//!
//! [`Config`] collects what the command line decided (array source, tick
//! interval, first algorithm) and turns it into a ready [`Session`].

use super::constants::{DEFAULT_ARRAY_SIZE, DEFAULT_TICK_MS};
use super::errors::SessionError;
use super::Session;
use crate::algorithms::AlgorithmKind;
use crate::input::{generate, ArrayPattern};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Length of a generated array
    pub size: usize,
    pub pattern: ArrayPattern,
    /// Explicit initial array; takes precedence over `size`/`pattern`
    pub values: Option<Vec<i32>>,
    pub interval_ms: u64,
    /// Seed for generated arrays; `None` draws one from the OS
    pub seed: Option<u64>,
    /// Algorithm to start immediately
    pub algorithm: Option<AlgorithmKind>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            size: DEFAULT_ARRAY_SIZE,
            pattern: ArrayPattern::Random,
            values: None,
            interval_ms: DEFAULT_TICK_MS,
            seed: None,
            algorithm: None,
        }
    }
}

impl Config {
    /// Random number generator for array generation, seeded if requested
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn initial_values(&self) -> Vec<i32> {
        match &self.values {
            Some(values) => values.clone(),
            None => generate(self.pattern, self.size, &mut self.rng()),
        }
    }

    /// Build the session this configuration describes
    pub fn build_session(&self) -> Result<Session, SessionError> {
        let mut session = Session::new(self.initial_values());
        session.set_tick_interval(self.interval_ms)?;
        if let Some(kind) = self.algorithm {
            session.select_algorithm(kind);
        }
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Playback;

    #[test]
    fn explicit_values_win_over_pattern() {
        let config = Config {
            values: Some(vec![5, 3, 8, 1]),
            pattern: ArrayPattern::Sorted,
            ..Config::default()
        };
        let session = config.build_session().expect("default interval is valid");
        assert_eq!(session.values(), &[5, 3, 8, 1]);
        assert_eq!(session.playback(), Playback::Idle);
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let config = Config {
            seed: Some(7),
            size: 20,
            ..Config::default()
        };
        assert_eq!(config.initial_values(), config.initial_values());
        assert_eq!(config.initial_values().len(), 20);
    }

    #[test]
    fn invalid_interval_is_rejected() {
        let config = Config {
            interval_ms: 5,
            ..Config::default()
        };
        assert!(matches!(
            config.build_session(),
            Err(SessionError::InvalidTickInterval { ms: 5, .. })
        ));
    }

    #[test]
    fn algorithm_starts_playing() {
        let config = Config {
            values: Some(vec![2, 1]),
            algorithm: Some(AlgorithmKind::Merge),
            ..Config::default()
        };
        let session = config.build_session().expect("valid config");
        assert_eq!(session.kind(), Some(AlgorithmKind::Merge));
        assert_eq!(session.playback(), Playback::Playing);
    }
}
