//! Error types for Outcome construction and reactions.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Names one of the two slots of an [`Outcome`](crate::Outcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchKind {
    /// The success slot.
    Success,
    /// The failure slot.
    Failure,
}

impl BranchKind {
    /// Returns the lowercase name of this branch.
    pub fn as_str(&self) -> &'static str {
        match self {
            BranchKind::Success => "success",
            BranchKind::Failure => "failure",
        }
    }
}

impl fmt::Display for BranchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rejected argument at an Outcome call site.
///
/// Both variants are programmer errors. They are returned immediately and
/// never wrapped or retried.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeError {
    /// A payload was absent when building an outcome.
    #[error("cannot build a {branch} outcome from an absent value")]
    AbsentValue { branch: BranchKind },

    /// An optional reaction was not supplied.
    #[error("the {branch} reaction must be present")]
    MissingReaction { branch: BranchKind },
}

impl OutcomeError {
    /// Returns the branch the rejected argument was meant for.
    pub fn branch(&self) -> BranchKind {
        match self {
            OutcomeError::AbsentValue { branch } | OutcomeError::MissingReaction { branch } => {
                *branch
            }
        }
    }
}

/// Convenience Result type for Outcome operations.
pub type Result<T> = std::result::Result<T, OutcomeError>;
