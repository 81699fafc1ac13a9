//! # Introduction
//!
//! sortty animates five sorting algorithms over an integer array, one
//! elementary operation at a time, so every comparison and swap can be
//! watched, paused and stepped through in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Input → SequenceBuffer → Stepper (one op per step) → Session → Snapshot → TUI
//! ```
//!
//! 1. [`input`]: array generation, comma-separated parsing, CSV files.
//! 2. [`buffer`]: the array under sort with counted compare/swap/write primitives.
//! 3. [`algorithms`]: algorithm kinds and the plain batch implementations.
//! 4. [`stepper`]: resumable state machines; quick and merge sort keep their
//!    recursion on explicit task stacks.
//! 5. [`session`]: drives one stepper from a cooperative tick, owns playback
//!    state and statistics, publishes [`session::Snapshot`]s.
//! 6. [`bench`]: times full batch sorts against each other.
//! 7. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported algorithms
//!
//! Bubble, insertion, selection, quick (Lomuto, last element pivot) and
//! merge (midpoint split, auxiliary merge) sort over `i32` keys.

pub mod algorithms;
pub mod bench;
pub mod buffer;
pub mod input;
pub mod session;
pub mod stepper;
pub mod ui;
