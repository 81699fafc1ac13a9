//! Sequence buffer for the stepped sorts
//!
//! This module provides the array a session sorts in place:
//! - [`SequenceBuffer`]: the values plus the primitives steppers use to touch them
//! - [`Counters`]: comparison and swap/write tallies accumulated by those primitives
//!
//! # Counting
//!
//! Only the counted primitives move the tallies:
//! - [`SequenceBuffer::greater`] / [`SequenceBuffer::less`] / [`SequenceBuffer::count_comparison`]
//!   add one comparison
//! - [`SequenceBuffer::swap`] adds one swap when the indices differ
//! - [`SequenceBuffer::write`] adds one swap (a single placed element)
//!
//! [`SequenceBuffer::get`] and [`SequenceBuffer::set`] are raw and never counted.
//!
//! # Bounds
//!
//! Indices are never clamped. Touching a slot outside `0..len` is a defect in
//! the caller and panics.

/// Comparison and swap/write tallies for one sort session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub comparisons: u64,
    pub swaps: u64,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The mutable array under sort
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceBuffer {
    values: Vec<i32>,
    counters: Counters,
}

impl SequenceBuffer {
    pub fn new(values: Vec<i32>) -> Self {
        SequenceBuffer {
            values,
            counters: Counters::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read the value at `index`
    pub fn get(&self, index: usize) -> i32 {
        self.check(index);
        self.values[index]
    }

    /// Store `value` at `index` without counting it
    pub fn set(&mut self, index: usize, value: i32) {
        self.check(index);
        self.values[index] = value;
    }

    /// Store `value` at `index`, counting one write
    pub fn write(&mut self, index: usize, value: i32) {
        self.set(index, value);
        self.counters.swaps += 1;
    }

    /// Exchange two slots. Swapping a slot with itself is a no-op and is not counted.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.check(a);
        self.check(b);
        if a != b {
            self.values.swap(a, b);
            self.counters.swaps += 1;
        }
    }

    /// Counted `values[a] > values[b]`
    pub fn greater(&mut self, a: usize, b: usize) -> bool {
        let result = self.get(a) > self.get(b);
        self.counters.comparisons += 1;
        result
    }

    /// Counted `values[a] < values[b]`
    pub fn less(&mut self, a: usize, b: usize) -> bool {
        let result = self.get(a) < self.get(b);
        self.counters.comparisons += 1;
        result
    }

    /// Count a comparison made against a key held outside the buffer
    pub fn count_comparison(&mut self) {
        self.counters.comparisons += 1;
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    /// Owned copy of the current contents for rendering
    pub fn snapshot(&self) -> Vec<i32> {
        self.values.clone()
    }

    /// Copy of `values[start..=end]`
    pub fn copy_range(&self, start: usize, end: usize) -> Vec<i32> {
        self.check(start);
        self.check(end);
        self.values[start..=end].to_vec()
    }

    pub fn counters(&self) -> Counters {
        self.counters
    }

    pub fn reset_counters(&mut self) {
        self.counters = Counters::new();
    }

    /// Replace the contents, resetting the counters
    pub fn replace(&mut self, values: Vec<i32>) {
        self.values = values;
        self.counters = Counters::new();
    }

    fn check(&self, index: usize) {
        if index >= self.values.len() {
            panic!(
                "index out of range: {} for buffer of length {}",
                index,
                self.values.len()
            );
        }
    }
}
