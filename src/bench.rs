//! Batch benchmark: time full (non-stepped) sorts of one random array
//!
//! Every algorithm sorts its own copy of the same data through
//! [`sort_batch`], and each result is checked to be a sorted permutation of
//! the input before it is reported.

use crate::algorithms::batch::{is_permutation_of, is_sorted, sort_batch};
use crate::algorithms::AlgorithmKind;
use crate::session::constants::BENCH_SIZE;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Number of values; each is drawn from `0..size`
    pub size: usize,
    pub algorithms: Vec<AlgorithmKind>,
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            size: BENCH_SIZE,
            algorithms: vec![AlgorithmKind::Quick, AlgorithmKind::Merge],
            seed: None,
        }
    }
}

/// Timing of one algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchRecord {
    pub kind: AlgorithmKind,
    pub elapsed: Duration,
    /// Output was a sorted permutation of the input
    pub verified: bool,
}

impl BenchRecord {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

impl fmt::Display for BenchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.3} ms", self.kind.title(), self.elapsed_ms())?;
        if !self.verified {
            write!(f, " (UNSORTED OUTPUT)")?;
        }
        Ok(())
    }
}

/// Random benchmark input, values in `0..size`
pub fn bench_input(size: usize, seed: Option<u64>) -> Vec<i32> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let upper = i32::try_from(size.max(1)).unwrap_or(i32::MAX);
    (0..size).map(|_| rng.gen_range(0..upper)).collect()
}

pub fn run_benchmark(config: &BenchConfig) -> Vec<BenchRecord> {
    let input = bench_input(config.size, config.seed);
    debug!(size = input.len(), "benchmark input ready");

    config
        .algorithms
        .iter()
        .map(|&kind| {
            let outcome = sort_batch(&input, kind);
            let verified = is_sorted(&outcome.sorted) && is_permutation_of(&outcome.sorted, &input);
            if !verified {
                warn!(kind = kind.name(), "batch sort produced unsorted output");
            }
            BenchRecord {
                kind,
                elapsed: outcome.elapsed,
                verified,
            }
        })
        .collect()
}
