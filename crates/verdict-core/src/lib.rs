//! # Verdict Core
//!
//! A two-state container for the result of a decision point.
//!
//! This crate provides:
//! - [`Outcome`] - Either a success value or a failure value
//! - [`Branch`] - The tagged view used for pattern matching
//! - [`Success`] / [`Failure`] - Markers for explicit conversions
//! - [`OutcomeError`] - Rejected arguments at construction or reaction time

pub mod error;
pub mod outcome;

// Re-exports for convenience
pub use error::{BranchKind, OutcomeError, Result};
pub use outcome::{Branch, Failure, Outcome, Success};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{BranchKind, OutcomeError};
    pub use crate::outcome::{Branch, Failure, Outcome, Success};
}
