//! Error types for the session boundary
//!
//! This module defines [`SessionError`], the requests a [`Session`] rejects.
//! A rejected request never mutates the session.
//!
//! Out-of-range indices are not represented here: they can only come from a
//! defect inside a stepper and panic in the buffer instead.
//!
//! [`Session`]: super::Session

use std::fmt;

/// A request the session refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The algorithm name matched none of the five supported sorts
    UnknownAlgorithmKind { name: String },

    /// Tick interval outside the accepted range
    InvalidTickInterval { ms: u64, min: u64, max: u64 },

    /// Restart requested before any algorithm was selected
    NoActiveSession,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::UnknownAlgorithmKind { name } => {
                write!(
                    f,
                    "Unknown algorithm '{}' (expected bubble, insertion, selection, quick or merge)",
                    name
                )
            }
            SessionError::InvalidTickInterval { ms, min, max } => {
                write!(
                    f,
                    "Tick interval {} ms is outside the accepted range {}..={} ms",
                    ms, min, max
                )
            }
            SessionError::NoActiveSession => {
                write!(f, "No algorithm has been selected yet")
            }
        }
    }
}

impl std::error::Error for SessionError {}
