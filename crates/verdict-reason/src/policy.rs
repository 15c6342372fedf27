//! Message validation policy for reasons.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ReasonError;
use crate::reason::ReasonKind;

/// How strictly [`Reason::checked`](crate::Reason::checked) treats messages.
///
/// The plain factories never validate; this only applies to the checked
/// constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessagePolicy {
    /// Accept any message, including an empty one.
    #[default]
    Permissive,
    /// Refuse messages that are empty or whitespace only.
    RejectBlank,
}

impl MessagePolicy {
    /// Check `message` for a reason of `kind`.
    pub fn check(&self, kind: ReasonKind, message: &str) -> Result<(), ReasonError> {
        match self {
            MessagePolicy::Permissive => Ok(()),
            MessagePolicy::RejectBlank if message.trim().is_empty() => {
                debug!(%kind, "rejected blank reason message");
                Err(ReasonError::BlankMessage { kind })
            }
            MessagePolicy::RejectBlank => Ok(()),
        }
    }
}
