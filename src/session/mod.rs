//! Session controller
//!
//! This module owns everything one sort run needs:
//! - [`Session`]: the buffer, the active stepper, markers, statistics and playback state
//! - [`Snapshot`]: the read-only view republished to the renderer after every step
//! - [`errors`]: requests the session rejects
//! - [`config`]: start-up configuration
//! - [`constants`]: tick bounds and default sizes
//!
//! # Pacing
//!
//! Nothing runs in the background. The owner calls [`Session::tick`] from its
//! event loop; a tick advances one step only while playing and only once the
//! tick interval has elapsed since the previous step. [`Session::step`] is the
//! out-of-band manual step and pauses automatic ticking first.
//!
//! # Lifecycle
//!
//! ```text
//! load_initial_array → Idle ──select_algorithm──→ Playing ⇄ Paused
//!                                                   │         │
//!                                                   └──done──→ Finished
//! ```
//!
//! Loading an array, selecting an algorithm or restarting drops the previous
//! stepper before anything else is touched.

pub mod config;
pub mod constants;
pub mod errors;

use crate::algorithms::AlgorithmKind;
use crate::buffer::SequenceBuffer;
use crate::stepper::{Markers, StepOutcome, Stepper};
use constants::{DEFAULT_TICK_MS, MAX_TICK_MS, MIN_TICK_MS};
use errors::SessionError;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace, warn};

pub use config::Config;

/// Whether ticks currently advance the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    /// No algorithm selected
    Idle,
    /// Ticks advance the stepper
    Playing,
    /// Ticks are withheld; manual steps still work
    Paused,
    /// The stepper reported completion; statistics are frozen
    Finished,
}

/// Everything a renderer needs after a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub values: Vec<i32>,
    pub highlight_a: Option<usize>,
    pub highlight_b: Option<usize>,
    pub settled_up_to: Option<usize>,
    pub settled_from: Option<usize>,
    pub comparisons: u64,
    pub swaps: u64,
    pub elapsed: Duration,
    pub terminal: bool,
    pub kind: Option<AlgorithmKind>,
    pub steps: u64,
}

impl Snapshot {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    pub fn markers(&self) -> Markers {
        Markers {
            highlight: self.highlight_a.zip(self.highlight_b),
            settled_up_to: self.settled_up_to,
            settled_from: self.settled_from,
        }
    }
}

/// Controller for one array and (at most) one running sort
#[derive(Debug)]
pub struct Session {
    buffer: SequenceBuffer,

    /// Buffer contents when the current algorithm was selected, for restart
    original: Vec<i32>,

    stepper: Option<Stepper>,
    markers: Markers,
    playback: Playback,
    tick_interval: Duration,

    /// When the last automatic or manual step ran
    last_tick: Instant,

    started_at: Option<Instant>,
    finished_at: Option<Instant>,
    steps: u64,
}

impl Session {
    /// Create an idle session over `values`
    pub fn new(values: Vec<i32>) -> Self {
        Session {
            original: values.clone(),
            buffer: SequenceBuffer::new(values),
            stepper: None,
            markers: Markers::default(),
            playback: Playback::Idle,
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
            last_tick: Instant::now(),
            started_at: None,
            finished_at: None,
            steps: 0,
        }
    }

    /// Replace the array, abandoning any running sort
    pub fn load_initial_array(&mut self, values: Vec<i32>) {
        self.stepper = None;
        debug!(len = values.len(), "loading array");
        self.original = values.clone();
        self.buffer.replace(values);
        self.markers = Markers::default();
        self.playback = Playback::Idle;
        self.started_at = None;
        self.finished_at = None;
        self.steps = 0;
    }

    /// Start sorting the current contents with `kind`, abandoning any running sort
    pub fn select_algorithm(&mut self, kind: AlgorithmKind) {
        self.stepper = None;
        self.original = self.buffer.snapshot();
        self.begin(kind);
    }

    /// [`select_algorithm`](Self::select_algorithm) by name; an unknown name changes nothing
    pub fn select_algorithm_by_name(&mut self, name: &str) -> Result<AlgorithmKind, SessionError> {
        let kind = name.parse::<AlgorithmKind>().inspect_err(|e| {
            warn!(%e, "rejected algorithm selection");
        })?;
        self.select_algorithm(kind);
        Ok(kind)
    }

    /// Start the current algorithm over from the array it was selected on
    pub fn restart(&mut self) -> Result<AlgorithmKind, SessionError> {
        let kind = self.kind().ok_or(SessionError::NoActiveSession)?;
        self.stepper = None;
        self.buffer.replace(self.original.clone());
        debug!(kind = kind.name(), "restarting");
        self.begin(kind);
        Ok(kind)
    }

    fn begin(&mut self, kind: AlgorithmKind) {
        let now = Instant::now();
        self.buffer.reset_counters();
        self.steps = 0;
        self.started_at = Some(now);
        self.last_tick = now;

        let stepper = Stepper::new(kind, self.buffer.len(), &mut self.markers);
        if stepper.is_done() {
            self.finished_at = Some(now);
            self.playback = Playback::Finished;
        } else {
            self.finished_at = None;
            self.playback = Playback::Playing;
        }
        self.stepper = Some(stepper);

        debug!(
            kind = kind.name(),
            len = self.buffer.len(),
            terminal = self.is_terminal(),
            "session started"
        );
    }

    /// Advance one step if playing and the tick interval has elapsed at `now`
    pub fn tick(&mut self, now: Instant) -> Option<StepOutcome> {
        if self.playback != Playback::Playing {
            return None;
        }
        if now.saturating_duration_since(self.last_tick) < self.tick_interval {
            return None;
        }
        self.last_tick = now;
        Some(self.advance())
    }

    /// Manual step: pause automatic ticking, then advance exactly once
    pub fn step(&mut self) -> StepOutcome {
        if self.playback == Playback::Playing {
            self.playback = Playback::Paused;
        }
        self.last_tick = Instant::now();
        self.advance()
    }

    /// Step until the stepper reports completion; returns the steps taken
    pub fn run_to_completion(&mut self) -> u64 {
        let before = self.steps;
        while self.stepper.is_some() && self.advance() == StepOutcome::Continue {}
        self.steps - before
    }

    fn advance(&mut self) -> StepOutcome {
        let Some(stepper) = self.stepper.as_mut() else {
            return StepOutcome::Done;
        };
        if stepper.is_done() {
            return StepOutcome::Done;
        }

        let kind = stepper.kind();
        let outcome = stepper.step(&mut self.buffer, &mut self.markers);
        self.steps += 1;
        trace!(step = self.steps, ?outcome, highlight = ?self.markers.highlight, "step");

        if outcome.is_done() {
            self.finished_at = Some(Instant::now());
            self.playback = Playback::Finished;
            let counters = self.buffer.counters();
            info!(
                kind = kind.name(),
                comparisons = counters.comparisons,
                swaps = counters.swaps,
                steps = self.steps,
                elapsed_ms = self.elapsed().as_secs_f64() * 1000.0,
                "sort complete"
            );
        }
        outcome
    }

    /// Withhold ticks; state is kept as is
    pub fn pause(&mut self) {
        if self.playback == Playback::Playing {
            self.playback = Playback::Paused;
        }
    }

    /// Continue ticking from where the session was paused
    pub fn resume(&mut self) {
        if self.playback == Playback::Paused {
            self.playback = Playback::Playing;
            self.last_tick = Instant::now();
        }
    }

    /// Pause if playing, resume if paused
    pub fn toggle_pause(&mut self) {
        match self.playback {
            Playback::Playing => self.pause(),
            Playback::Paused => self.resume(),
            Playback::Idle | Playback::Finished => {}
        }
    }

    /// Change the delay between automatic steps; must lie in `10..=500` ms
    pub fn set_tick_interval(&mut self, ms: u64) -> Result<(), SessionError> {
        if !(MIN_TICK_MS..=MAX_TICK_MS).contains(&ms) {
            warn!(ms, "rejected tick interval");
            return Err(SessionError::InvalidTickInterval {
                ms,
                min: MIN_TICK_MS,
                max: MAX_TICK_MS,
            });
        }
        debug!(ms, "tick interval changed");
        self.tick_interval = Duration::from_millis(ms);
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn kind(&self) -> Option<AlgorithmKind> {
        self.stepper.as_ref().map(Stepper::kind)
    }

    pub fn is_terminal(&self) -> bool {
        self.stepper.as_ref().is_some_and(Stepper::is_done)
    }

    pub fn values(&self) -> &[i32] {
        self.buffer.as_slice()
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn pending_tasks(&self) -> usize {
        self.stepper.as_ref().map_or(0, Stepper::pending_tasks)
    }

    pub fn max_pending_tasks(&self) -> usize {
        self.stepper.as_ref().map_or(0, Stepper::max_pending_tasks)
    }

    /// Time since the algorithm was selected, frozen once it finished
    pub fn elapsed(&self) -> Duration {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => end.saturating_duration_since(start),
            (Some(start), None) => start.elapsed(),
            _ => Duration::ZERO,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let counters = self.buffer.counters();
        Snapshot {
            values: self.buffer.snapshot(),
            highlight_a: self.markers.highlight.map(|(a, _)| a),
            highlight_b: self.markers.highlight.map(|(_, b)| b),
            settled_up_to: self.markers.settled_up_to,
            settled_from: self.markers.settled_from,
            comparisons: counters.comparisons,
            swaps: counters.swaps,
            elapsed: self.elapsed(),
            terminal: self.is_terminal(),
            kind: self.kind(),
            steps: self.steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_respects_interval_and_playback() {
        let mut session = Session::new(vec![3, 2, 1]);
        let start = Instant::now();
        assert_eq!(session.tick(start + Duration::from_secs(1)), None, "idle sessions ignore ticks");

        session.select_algorithm(AlgorithmKind::Bubble);
        session.set_tick_interval(100).expect("100 ms is in range");
        let selected = session.last_tick;

        assert_eq!(session.tick(selected + Duration::from_millis(50)), None);
        assert_eq!(
            session.tick(selected + Duration::from_millis(100)),
            Some(StepOutcome::Continue)
        );
        assert_eq!(session.steps(), 1);

        session.pause();
        assert_eq!(session.tick(selected + Duration::from_secs(10)), None);
        assert_eq!(session.steps(), 1);
    }

    #[test]
    fn manual_step_pauses_playback() {
        let mut session = Session::new(vec![2, 1, 3]);
        session.select_algorithm(AlgorithmKind::Insertion);
        assert_eq!(session.playback(), Playback::Playing);

        session.step();
        assert_eq!(session.playback(), Playback::Paused);
        session.resume();
        assert_eq!(session.playback(), Playback::Playing);
    }

    #[test]
    fn elapsed_is_frozen_after_finish() {
        let mut session = Session::new(vec![2, 1]);
        session.select_algorithm(AlgorithmKind::Selection);
        session.run_to_completion();
        assert_eq!(session.playback(), Playback::Finished);
        let first = session.elapsed();
        std::thread::sleep(Duration::from_millis(2));
        assert_eq!(session.elapsed(), first);
    }

    #[test]
    fn restart_requires_a_selection() {
        let mut session = Session::new(vec![1, 2]);
        assert_eq!(session.restart(), Err(SessionError::NoActiveSession));
    }
}
