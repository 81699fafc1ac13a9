//! Quick sort as an explicit-stack state machine
//!
//! The recursive `quick_sort(low, high)` call tree is replaced by a stack of
//! pending [`Range`]s. One step pops one range and, if it holds at least two
//! elements, runs a complete Lomuto partition over it. The partition is the
//! indivisible unit of this machine.
//!
//! # Push Order
//!
//! After partitioning around pivot `p`, `(p + 1, high)` is pushed before
//! `(low, p - 1)`, so the left side is popped next. This reproduces the
//! descent order of the recursive version.

use super::{Markers, StepOutcome};
use crate::buffer::SequenceBuffer;

/// Inclusive index range still waiting to be partitioned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub low: usize,
    pub high: usize,
}

impl Range {
    fn is_trivial(self) -> bool {
        self.low >= self.high
    }
}

#[derive(Debug, Clone)]
pub struct QuickStepper {
    len: usize,
    stack: Vec<Range>,
    max_pending: usize,
    done: bool,
}

impl QuickStepper {
    pub fn new(len: usize) -> Self {
        let stack = if len > 1 {
            vec![Range {
                low: 0,
                high: len - 1,
            }]
        } else {
            Vec::new()
        };
        QuickStepper {
            len,
            max_pending: stack.len(),
            done: stack.is_empty(),
            stack,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn pending_tasks(&self) -> usize {
        self.stack.len()
    }

    pub fn max_pending_tasks(&self) -> usize {
        self.max_pending
    }

    /// Ranges still waiting, top of the stack last
    pub fn pending(&self) -> &[Range] {
        &self.stack
    }

    pub fn step(&mut self, buffer: &mut SequenceBuffer, markers: &mut Markers) -> StepOutcome {
        if self.done {
            return StepOutcome::Done;
        }

        if let Some(range) = self.stack.pop() {
            if range.is_trivial() {
                markers.highlight = None;
            } else {
                markers.highlight = Some((range.low, range.high));
                let pivot = partition(buffer, range.low, range.high);
                self.stack.push(Range {
                    low: pivot + 1,
                    high: range.high,
                });
                // A pivot at index 0 leaves no left side to represent
                if let Some(end) = pivot.checked_sub(1) {
                    self.stack.push(Range {
                        low: range.low,
                        high: end,
                    });
                }
                self.max_pending = self.max_pending.max(self.stack.len());
            }
        }

        if self.stack.is_empty() {
            self.done = true;
            markers.settle_all(self.len);
            return StepOutcome::Done;
        }

        StepOutcome::Continue
    }
}

/// Lomuto partition of `low..=high` around the value at `high`.
///
/// Returns the pivot's final index. The pivot slot is never touched by the
/// scan, so comparisons can read it in place.
fn partition(buffer: &mut SequenceBuffer, low: usize, high: usize) -> usize {
    let mut store = low;
    for j in low..high {
        if buffer.less(j, high) {
            buffer.swap(store, j);
            store += 1;
        }
    }
    buffer.swap(store, high);
    store
}
