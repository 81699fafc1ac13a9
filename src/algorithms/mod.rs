//! The five sorting algorithms
//!
//! This module names the algorithms and holds their reference implementations:
//! - [`AlgorithmKind`]: which algorithm a session or batch run uses
//! - [`batch`]: plain (non-stepped) implementations, optionally instrumented
//!
//! The stepped versions live in [`crate::stepper`] and must count exactly the
//! same elementary operations as [`batch`] does through its [`batch::Probe`].

pub mod batch;

use crate::session::errors::SessionError;
use std::fmt;
use std::str::FromStr;

/// One of the supported sorting algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    Bubble,
    Insertion,
    Selection,
    Quick,
    Merge,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 5] = [
        AlgorithmKind::Bubble,
        AlgorithmKind::Insertion,
        AlgorithmKind::Selection,
        AlgorithmKind::Quick,
        AlgorithmKind::Merge,
    ];

    /// Short lowercase name, as accepted on the command line
    pub fn name(self) -> &'static str {
        match self {
            AlgorithmKind::Bubble => "bubble",
            AlgorithmKind::Insertion => "insertion",
            AlgorithmKind::Selection => "selection",
            AlgorithmKind::Quick => "quick",
            AlgorithmKind::Merge => "merge",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AlgorithmKind::Bubble => "Bubble Sort",
            AlgorithmKind::Insertion => "Insertion Sort",
            AlgorithmKind::Selection => "Selection Sort",
            AlgorithmKind::Quick => "Quick Sort",
            AlgorithmKind::Merge => "Merge Sort",
        }
    }

    /// One-paragraph explanation shown in the description pane
    pub fn description(self) -> &'static str {
        match self {
            AlgorithmKind::Bubble => {
                "Repeatedly steps through the list, compares adjacent elements, and swaps them \
                 if they are in the wrong order. The largest unsorted value bubbles to the end \
                 of each pass."
            }
            AlgorithmKind::Insertion => {
                "Builds the final sorted array one item at a time. Each step takes the next \
                 element and shifts larger, already placed elements right until the gap is \
                 where it belongs."
            }
            AlgorithmKind::Selection => {
                "Divides the list into a sorted prefix and an unsorted suffix. Each step finds \
                 the minimum of the suffix and swaps it to the end of the prefix."
            }
            AlgorithmKind::Quick => {
                "Divide and conquer. Each step picks the last element of a pending range as \
                 pivot and partitions the range around it, then queues both sides."
            }
            AlgorithmKind::Merge => {
                "Divide and conquer. Ranges are split at the midpoint until single elements \
                 remain, then adjacent sorted halves are merged back together."
            }
        }
    }

    /// Best, average and worst case running time
    pub fn complexity(self) -> (&'static str, &'static str, &'static str) {
        match self {
            AlgorithmKind::Bubble | AlgorithmKind::Insertion => ("O(n)", "O(n²)", "O(n²)"),
            AlgorithmKind::Selection => ("O(n²)", "O(n²)", "O(n²)"),
            AlgorithmKind::Quick => ("O(n log n)", "O(n log n)", "O(n²)"),
            AlgorithmKind::Merge => ("O(n log n)", "O(n log n)", "O(n log n)"),
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl FromStr for AlgorithmKind {
    type Err = SessionError;

    /// Accepts `quick`, `Quick`, `quick-sort`, `quick_sort` and `Quick Sort` alike
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let stem = normalized
            .strip_suffix("sort")
            .map(|rest| rest.trim_end_matches(['-', '_', ' ']))
            .unwrap_or(&normalized);

        AlgorithmKind::ALL
            .into_iter()
            .find(|kind| kind.name() == stem)
            .ok_or_else(|| SessionError::UnknownAlgorithmKind {
                name: s.to_string(),
            })
    }
}
