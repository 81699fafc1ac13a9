//! Resumable sorting state machines
//!
//! This module turns each sort into an explicitly resumable machine that
//! performs one elementary operation per [`Stepper::step`] call:
//! - [`simple`]: bubble, insertion and selection sort (cursor based)
//! - [`quick`]: quick sort over an explicit stack of partition ranges
//! - [`merge`]: merge sort over an explicit stack of split/merge tasks
//!
//! # Step Contract
//!
//! - A step never blocks and never recurses; it runs to completion and returns.
//! - Once a machine has reported [`StepOutcome::Done`], further calls return
//!   `Done` again and touch nothing.
//! - Highlights are set before the step's effect is applied, so a renderer
//!   sampling [`Markers`] right after a step sees the pair responsible for it.
//! - Comparisons and swaps are counted by the [`SequenceBuffer`] primitives;
//!   the counting rules mirror [`crate::algorithms::batch`] exactly.

pub mod merge;
pub mod quick;
pub mod simple;

use crate::algorithms::AlgorithmKind;
use crate::buffer::SequenceBuffer;

pub use merge::MergeStepper;
pub use quick::QuickStepper;
pub use simple::{BubbleStepper, InsertionStepper, SelectionStepper};

/// Result of one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// More work remains
    Continue,
    /// The buffer is sorted; further steps are no-ops
    Done,
}

impl StepOutcome {
    pub fn is_done(self) -> bool {
        self == StepOutcome::Done
    }
}

/// Rendering hints published by a stepper; they carry no algorithmic weight
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Markers {
    /// Pair of indices most recently compared or touched
    pub highlight: Option<(usize, usize)>,
    /// Every index `<=` this one is settled (monotonically non-decreasing)
    pub settled_up_to: Option<usize>,
    /// Every index `>=` this one is settled (bubble sort builds its sorted run from the right)
    pub settled_from: Option<usize>,
}

impl Markers {
    pub fn is_settled(&self, index: usize) -> bool {
        self.settled_up_to.is_some_and(|end| index <= end)
            || self.settled_from.is_some_and(|start| index >= start)
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlight.is_some_and(|(a, b)| index == a || index == b)
    }

    /// Mark the whole buffer of length `len` as settled
    pub(crate) fn settle_all(&mut self, len: usize) {
        self.settled_up_to = len.checked_sub(1);
        self.settled_from = None;
    }

    /// Raise the settled prefix, never lowering it
    pub(crate) fn settle_up_to(&mut self, index: usize) {
        self.settled_up_to = Some(self.settled_up_to.map_or(index, |end| end.max(index)));
    }
}

/// The active state machine for one session
#[derive(Debug, Clone)]
pub enum Stepper {
    Bubble(BubbleStepper),
    Insertion(InsertionStepper),
    Selection(SelectionStepper),
    Quick(QuickStepper),
    Merge(MergeStepper),
}

impl Stepper {
    /// Build the machine for `kind` over a buffer of length `len`.
    ///
    /// Buffers of zero or one element produce a machine that is already done;
    /// `markers` is updated to reflect that.
    pub fn new(kind: AlgorithmKind, len: usize, markers: &mut Markers) -> Self {
        *markers = Markers::default();
        let stepper = match kind {
            AlgorithmKind::Bubble => Stepper::Bubble(BubbleStepper::new(len)),
            AlgorithmKind::Insertion => Stepper::Insertion(InsertionStepper::new(len)),
            AlgorithmKind::Selection => Stepper::Selection(SelectionStepper::new(len)),
            AlgorithmKind::Quick => Stepper::Quick(QuickStepper::new(len)),
            AlgorithmKind::Merge => Stepper::Merge(MergeStepper::new(len)),
        };
        if stepper.is_done() {
            markers.settle_all(len);
        }
        stepper
    }

    pub fn kind(&self) -> AlgorithmKind {
        match self {
            Stepper::Bubble(_) => AlgorithmKind::Bubble,
            Stepper::Insertion(_) => AlgorithmKind::Insertion,
            Stepper::Selection(_) => AlgorithmKind::Selection,
            Stepper::Quick(_) => AlgorithmKind::Quick,
            Stepper::Merge(_) => AlgorithmKind::Merge,
        }
    }

    /// Perform one elementary operation
    pub fn step(&mut self, buffer: &mut SequenceBuffer, markers: &mut Markers) -> StepOutcome {
        match self {
            Stepper::Bubble(s) => s.step(buffer, markers),
            Stepper::Insertion(s) => s.step(buffer, markers),
            Stepper::Selection(s) => s.step(buffer, markers),
            Stepper::Quick(s) => s.step(buffer, markers),
            Stepper::Merge(s) => s.step(buffer, markers),
        }
    }

    pub fn is_done(&self) -> bool {
        match self {
            Stepper::Bubble(s) => s.is_done(),
            Stepper::Insertion(s) => s.is_done(),
            Stepper::Selection(s) => s.is_done(),
            Stepper::Quick(s) => s.is_done(),
            Stepper::Merge(s) => s.is_done(),
        }
    }

    /// Number of range tasks still queued (zero for the cursor-based sorts)
    pub fn pending_tasks(&self) -> usize {
        match self {
            Stepper::Quick(s) => s.pending_tasks(),
            Stepper::Merge(s) => s.pending_tasks(),
            _ => 0,
        }
    }

    /// Deepest the task stack has been during this session
    pub fn max_pending_tasks(&self) -> usize {
        match self {
            Stepper::Quick(s) => s.max_pending_tasks(),
            Stepper::Merge(s) => s.max_pending_tasks(),
            _ => 0,
        }
    }
}
