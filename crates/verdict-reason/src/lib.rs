//! # Verdict Reason
//!
//! Ready-made failure payloads for [`Outcome`].
//!
//! - [`Reason`] - A message tagged with a [`ReasonKind`]
//! - [`Verdict`] - An outcome whose failure slot is a [`Reason`]
//! - [`MessagePolicy`] - Optional validation of reason messages

pub mod error;
pub mod policy;
pub mod reason;

pub use error::ReasonError;
pub use policy::MessagePolicy;
pub use reason::{Reason, ReasonKind};
pub use verdict_core::{Branch, BranchKind, Failure, Outcome, OutcomeError, Success};

/// An outcome that fails with a [`Reason`].
pub type Verdict<S> = Outcome<S, Reason>;

impl<S> From<Reason> for Outcome<S, Reason> {
    fn from(reason: Reason) -> Self {
        Outcome::failure(reason)
    }
}

/// Prelude module for common imports.
pub mod prelude {
    pub use crate::error::ReasonError;
    pub use crate::policy::MessagePolicy;
    pub use crate::reason::{Reason, ReasonKind};
    pub use crate::Verdict;
    pub use verdict_core::prelude::*;
}
