//! Merge sort as an explicit-stack state machine
//!
//! The recursive decompose/recurse/merge call tree becomes a stack of
//! [`MergeTask`]s, one task popped per step:
//! - `Split` of a single element is a finished leaf and does nothing
//! - `Split` of a wider range queues `Merge`, then the right half, then the left half
//! - `Merge` combines two adjacent sorted runs through an auxiliary copy
//!
//! # Ordering
//!
//! The `Merge` for a range sits below both of its halves on the stack, so it
//! is popped only after every task spawned by those halves has finished. That
//! is the post-order the recursive version gets from its call stack. Pushing
//! the merge last, or merging while splitting, merges unsorted halves and
//! silently corrupts the result.

use super::{Markers, StepOutcome};
use crate::buffer::SequenceBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeTask {
    /// Sort `left..=right`
    Split { left: usize, right: usize },
    /// Merge the sorted runs `left..=mid` and `mid+1..=right`
    Merge { left: usize, mid: usize, right: usize },
}

#[derive(Debug, Clone)]
pub struct MergeStepper {
    len: usize,
    stack: Vec<MergeTask>,
    max_pending: usize,
    done: bool,
}

impl MergeStepper {
    pub fn new(len: usize) -> Self {
        let stack = if len > 1 {
            vec![MergeTask::Split {
                left: 0,
                right: len - 1,
            }]
        } else {
            Vec::new()
        };
        MergeStepper {
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

    /// Tasks still waiting, top of the stack last
    pub fn pending(&self) -> &[MergeTask] {
        &self.stack
    }

    pub fn step(&mut self, buffer: &mut SequenceBuffer, markers: &mut Markers) -> StepOutcome {
        if self.done {
            return StepOutcome::Done;
        }

        match self.stack.pop() {
            Some(MergeTask::Split { left, right }) if left >= right => {
                markers.highlight = None;
            }
            Some(MergeTask::Split { left, right }) => {
                let mid = left + (right - left) / 2;
                markers.highlight = Some((left, right));
                self.stack.push(MergeTask::Merge { left, mid, right });
                self.stack.push(MergeTask::Split {
                    left: mid + 1,
                    right,
                });
                self.stack.push(MergeTask::Split { left, right: mid });
                self.max_pending = self.max_pending.max(self.stack.len());
            }
            Some(MergeTask::Merge { left, mid, right }) => {
                markers.highlight = Some((left, right));
                merge(buffer, left, mid, right);
            }
            None => {}
        }

        if self.stack.is_empty() {
            self.done = true;
            markers.settle_all(self.len);
            return StepOutcome::Done;
        }

        StepOutcome::Continue
    }
}

fn merge(buffer: &mut SequenceBuffer, left: usize, mid: usize, right: usize) {
    let lower = buffer.copy_range(left, mid);
    let upper = buffer.copy_range(mid + 1, right);

    let (mut p, mut q, mut k) = (0, 0, left);
    while p < lower.len() && q < upper.len() {
        buffer.count_comparison();
        // `<=` keeps equal keys in their original order
        if lower[p] <= upper[q] {
            buffer.write(k, lower[p]);
            p += 1;
        } else {
            buffer.write(k, upper[q]);
            q += 1;
        }
        k += 1;
    }
    for &value in lower[p..].iter().chain(&upper[q..]) {
        buffer.write(k, value);
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(values: &[i32]) -> (SequenceBuffer, MergeStepper, usize) {
        let mut stepper = MergeStepper::new(values.len());
        let mut buffer = SequenceBuffer::new(values.to_vec());
        let mut markers = Markers::default();
        let mut steps = 1;
        while stepper.step(&mut buffer, &mut markers) == StepOutcome::Continue {
            steps += 1;
        }
        (buffer, stepper, steps)
    }

    #[test]
    fn duplicates_survive_the_merge() {
        let (buffer, stepper, _) = run(&[4, 2, 2, 3]);
        assert_eq!(buffer.as_slice(), &[2, 2, 3, 4]);
        assert_eq!(stepper.pending_tasks(), 0);
        assert_eq!(buffer.counters().swaps, 8);
    }

    #[test]
    fn split_queues_merge_below_both_halves() {
        let mut stepper = MergeStepper::new(4);
        let mut buffer = SequenceBuffer::new(vec![4, 3, 2, 1]);
        let mut markers = Markers::default();

        stepper.step(&mut buffer, &mut markers);
        assert_eq!(buffer.as_slice(), &[4, 3, 2, 1], "splitting never moves data");
        assert_eq!(
            stepper.pending(),
            &[
                MergeTask::Merge { left: 0, mid: 1, right: 3 },
                MergeTask::Split { left: 2, right: 3 },
                MergeTask::Split { left: 0, right: 1 },
            ]
        );
    }

    #[test]
    fn every_range_takes_one_split_and_one_merge() {
        // 4 elements: 3 inner splits, 3 merges, 4 leaves
        let (buffer, stepper, steps) = run(&[4, 3, 2, 1]);
        assert_eq!(buffer.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(steps, 10);
        assert!(stepper.max_pending_tasks() <= 5);
    }
}
