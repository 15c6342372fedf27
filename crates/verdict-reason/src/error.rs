//! Error types for building reasons.

use thiserror::Error;

use crate::reason::ReasonKind;

/// A reason was refused by its [`MessagePolicy`](crate::MessagePolicy).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReasonError {
    /// The message was empty or whitespace only.
    #[error("{kind} reason requires a non-blank message")]
    BlankMessage { kind: ReasonKind },
}
