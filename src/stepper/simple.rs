//! Cursor-based steppers: bubble, insertion and selection sort
//!
//! Each machine keeps its loop cursors in fields instead of on the call stack.
//! The granularity differs per algorithm:
//! - bubble: one adjacent comparison (and maybe swap) per step
//! - selection: one full scan of the unsorted suffix plus the swap into place
//! - insertion: one complete element insertion (scan, shifts, drop)

use super::{Markers, StepOutcome};
use crate::buffer::SequenceBuffer;

/// Bubble sort, one adjacent comparison per step
#[derive(Debug, Clone)]
pub struct BubbleStepper {
    len: usize,
    /// Completed passes; the last `outer` slots are settled
    outer: usize,
    /// Left index of the next adjacent pair
    inner: usize,
    done: bool,
}

impl BubbleStepper {
    pub fn new(len: usize) -> Self {
        BubbleStepper {
            len,
            outer: 0,
            inner: 0,
            done: len <= 1,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn step(&mut self, buffer: &mut SequenceBuffer, markers: &mut Markers) -> StepOutcome {
        if self.done {
            return StepOutcome::Done;
        }

        let j = self.inner;
        markers.highlight = Some((j, j + 1));
        if buffer.greater(j, j + 1) {
            buffer.swap(j, j + 1);
        }
        self.inner += 1;

        // End of the unsorted prefix: the largest remaining value is now in place
        let boundary = self.len - self.outer - 1;
        if self.inner >= boundary {
            markers.settled_from = Some(boundary);
            self.outer += 1;
            self.inner = 0;
            if self.outer >= self.len - 1 {
                self.done = true;
                markers.settle_all(self.len);
                return StepOutcome::Done;
            }
        }

        StepOutcome::Continue
    }
}

/// Insertion sort, one element inserted per step
#[derive(Debug, Clone)]
pub struct InsertionStepper {
    len: usize,
    /// Index of the next element to insert
    outer: usize,
    done: bool,
}

impl InsertionStepper {
    pub fn new(len: usize) -> Self {
        InsertionStepper {
            len,
            outer: 1,
            done: len <= 1,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn step(&mut self, buffer: &mut SequenceBuffer, markers: &mut Markers) -> StepOutcome {
        if self.done {
            return StepOutcome::Done;
        }

        let i = self.outer;
        let key = buffer.get(i);

        // Find the gap: one comparison per placed element examined
        let mut gap = i;
        while gap > 0 {
            buffer.count_comparison();
            if buffer.get(gap - 1) > key {
                gap -= 1;
            } else {
                break;
            }
        }

        markers.highlight = Some((gap, i));
        for k in (gap + 1..=i).rev() {
            let shifted = buffer.get(k - 1);
            buffer.write(k, shifted);
        }
        buffer.set(gap, key);

        markers.settle_up_to(i);
        self.outer += 1;
        if self.outer >= self.len {
            self.done = true;
            markers.settle_all(self.len);
            return StepOutcome::Done;
        }

        StepOutcome::Continue
    }
}

/// Selection sort, one full suffix scan and swap per step
#[derive(Debug, Clone)]
pub struct SelectionStepper {
    len: usize,
    /// Slot being filled with the suffix minimum
    outer: usize,
    done: bool,
}

impl SelectionStepper {
    pub fn new(len: usize) -> Self {
        SelectionStepper {
            len,
            outer: 0,
            done: len <= 1,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn step(&mut self, buffer: &mut SequenceBuffer, markers: &mut Markers) -> StepOutcome {
        if self.done {
            return StepOutcome::Done;
        }

        let i = self.outer;
        let mut min_index = i;
        for k in i + 1..self.len {
            if buffer.less(k, min_index) {
                min_index = k;
            }
        }

        markers.highlight = Some((i, min_index));
        buffer.swap(i, min_index);

        markers.settle_up_to(i);
        self.outer += 1;
        if self.outer >= self.len - 1 {
            self.done = true;
            markers.settle_all(self.len);
            return StepOutcome::Done;
        }

        StepOutcome::Continue
    }
}
