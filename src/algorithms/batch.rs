//! Reference (batch) sorting implementations
//!
//! These run to completion on a slice with no stepping and no highlighting.
//! Quick sort and merge sort use ordinary recursion here because nothing
//! needs to pause them.
//!
//! # Instrumentation
//!
//! Every algorithm is generic over a [`Probe`]. The unit probe `()` does
//! nothing and compiles away; [`Counters`] tallies the same elementary
//! operations the steppers count, which is what lets the two be cross-checked.

use super::AlgorithmKind;
use crate::buffer::Counters;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Observer for the elementary operations of a batch sort
pub trait Probe {
    /// One key comparison was made
    fn compared(&mut self);
    /// One element was exchanged or placed
    fn wrote(&mut self);
}

impl Probe for () {
    #[inline]
    fn compared(&mut self) {}
    #[inline]
    fn wrote(&mut self) {}
}

impl Probe for Counters {
    fn compared(&mut self) {
        self.comparisons += 1;
    }

    fn wrote(&mut self) {
        self.swaps += 1;
    }
}

/// Result of a timed batch sort
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    pub sorted: Vec<i32>,
    pub elapsed: Duration,
}

impl BatchOutcome {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Sort `arr` in place with `kind`, uninstrumented
pub fn sort_in_place(kind: AlgorithmKind, arr: &mut [i32]) {
    sort_with(kind, arr, &mut ());
}

/// Sort a copy of `values`, counting comparisons and swaps/writes
pub fn sort_counted(kind: AlgorithmKind, values: &[i32]) -> (Vec<i32>, Counters) {
    let mut sorted = values.to_vec();
    let mut counters = Counters::new();
    sort_with(kind, &mut sorted, &mut counters);
    (sorted, counters)
}

/// Sort a copy of `values` and measure how long the sort alone took
pub fn sort_batch(values: &[i32], kind: AlgorithmKind) -> BatchOutcome {
    let mut sorted = values.to_vec();
    let start = Instant::now();
    sort_in_place(kind, &mut sorted);
    let elapsed = start.elapsed();
    BatchOutcome { sorted, elapsed }
}

pub fn sort_with<P: Probe>(kind: AlgorithmKind, arr: &mut [i32], probe: &mut P) {
    match kind {
        AlgorithmKind::Bubble => bubble_sort(arr, probe),
        AlgorithmKind::Insertion => insertion_sort(arr, probe),
        AlgorithmKind::Selection => selection_sort(arr, probe),
        AlgorithmKind::Quick => quick_sort(arr, probe),
        AlgorithmKind::Merge => merge_sort(arr, probe),
    }
}

fn swap<P: Probe>(arr: &mut [i32], a: usize, b: usize, probe: &mut P) {
    if a != b {
        arr.swap(a, b);
        probe.wrote();
    }
}

pub fn bubble_sort<P: Probe>(arr: &mut [i32], probe: &mut P) {
    let n = arr.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            probe.compared();
            if arr[j] > arr[j + 1] {
                swap(arr, j, j + 1, probe);
            }
        }
    }
}

pub fn selection_sort<P: Probe>(arr: &mut [i32], probe: &mut P) {
    let n = arr.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_index = i;
        for j in i + 1..n {
            probe.compared();
            if arr[j] < arr[min_index] {
                min_index = j;
            }
        }
        swap(arr, i, min_index, probe);
    }
}

pub fn insertion_sort<P: Probe>(arr: &mut [i32], probe: &mut P) {
    for i in 1..arr.len() {
        let key = arr[i];
        let mut j = i;
        while j > 0 {
            probe.compared();
            if arr[j - 1] > key {
                arr[j] = arr[j - 1];
                probe.wrote();
                j -= 1;
            } else {
                break;
            }
        }
        arr[j] = key;
    }
}

pub fn quick_sort<P: Probe>(arr: &mut [i32], probe: &mut P) {
    if arr.len() > 1 {
        quick_sort_range(arr, 0, arr.len() - 1, probe);
    }
}

fn quick_sort_range<P: Probe>(arr: &mut [i32], low: usize, high: usize, probe: &mut P) {
    if low < high {
        let pivot = partition(arr, low, high, probe);
        if pivot > 0 {
            quick_sort_range(arr, low, pivot - 1, probe);
        }
        quick_sort_range(arr, pivot + 1, high, probe);
    }
}

/// Lomuto partition of `arr[low..=high]` around `arr[high]`; returns the pivot's final index
pub fn partition<P: Probe>(arr: &mut [i32], low: usize, high: usize, probe: &mut P) -> usize {
    let pivot = arr[high];
    // Next slot of the "less than pivot" region
    let mut store = low;
    for j in low..high {
        probe.compared();
        if arr[j] < pivot {
            swap(arr, store, j, probe);
            store += 1;
        }
    }
    swap(arr, store, high, probe);
    store
}

pub fn merge_sort<P: Probe>(arr: &mut [i32], probe: &mut P) {
    if arr.len() > 1 {
        merge_sort_range(arr, 0, arr.len() - 1, probe);
    }
}

fn merge_sort_range<P: Probe>(arr: &mut [i32], left: usize, right: usize, probe: &mut P) {
    if left < right {
        let mid = left + (right - left) / 2;
        merge_sort_range(arr, left, mid, probe);
        merge_sort_range(arr, mid + 1, right, probe);
        merge(arr, left, mid, right, probe);
    }
}

/// Merge the sorted runs `arr[left..=mid]` and `arr[mid+1..=right]`
pub fn merge<P: Probe>(arr: &mut [i32], left: usize, mid: usize, right: usize, probe: &mut P) {
    let lower = arr[left..=mid].to_vec();
    let upper = arr[mid + 1..=right].to_vec();

    let (mut p, mut q, mut k) = (0, 0, left);
    while p < lower.len() && q < upper.len() {
        probe.compared();
        if lower[p] <= upper[q] {
            arr[k] = lower[p];
            p += 1;
        } else {
            arr[k] = upper[q];
            q += 1;
        }
        probe.wrote();
        k += 1;
    }
    for &value in lower[p..].iter().chain(&upper[q..]) {
        arr[k] = value;
        probe.wrote();
        k += 1;
    }
}

/// True when `values` is in non-decreasing order
pub fn is_sorted(values: &[i32]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// True when `a` and `b` hold the same multiset of values
pub fn is_permutation_of(a: &[i32], b: &[i32]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut counts: FxHashMap<i32, i64> = FxHashMap::default();
    for &value in a {
        *counts.entry(value).or_insert(0) += 1;
    }
    for &value in b {
        *counts.entry(value).or_insert(0) -= 1;
    }
    counts.values().all(|&count| count == 0)
}
