//! Categorized failure reasons.
//!
//! A [`Reason`] is a ready-made failure payload: a message, a [`ReasonKind`]
//! and an optional list of context values kept for diagnostics.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ReasonError;
use crate::policy::MessagePolicy;

/// Category of a failure reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonKind {
    /// Generic error (default).
    #[default]
    Error,
    /// The requested item does not exist.
    NotFound,
    /// A dependency is temporarily unavailable.
    Unavailable,
    /// The operation produced nothing to return.
    NoContent,
    /// The caller is not allowed to do this.
    Forbidden,
    /// The caller is not authenticated.
    Unauthorized,
    /// The input is invalid as a whole.
    Invalid,
    /// A specific argument is invalid.
    InvalidArgument,
    /// The operation conflicts with current state.
    Conflict,
    /// The item already exists.
    Duplicate,
    /// Stored data is inconsistent.
    Inconsistent,
}

impl ReasonKind {
    /// Every kind, in declaration order.
    pub const ALL: [ReasonKind; 11] = [
        ReasonKind::Error,
        ReasonKind::NotFound,
        ReasonKind::Unavailable,
        ReasonKind::NoContent,
        ReasonKind::Forbidden,
        ReasonKind::Unauthorized,
        ReasonKind::Invalid,
        ReasonKind::InvalidArgument,
        ReasonKind::Conflict,
        ReasonKind::Duplicate,
        ReasonKind::Inconsistent,
    ];

    /// Returns the snake_case tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonKind::Error => "error",
            ReasonKind::NotFound => "not_found",
            ReasonKind::Unavailable => "unavailable",
            ReasonKind::NoContent => "no_content",
            ReasonKind::Forbidden => "forbidden",
            ReasonKind::Unauthorized => "unauthorized",
            ReasonKind::Invalid => "invalid",
            ReasonKind::InvalidArgument => "invalid_argument",
            ReasonKind::Conflict => "conflict",
            ReasonKind::Duplicate => "duplicate",
            ReasonKind::Inconsistent => "inconsistent",
        }
    }
}

impl fmt::Display for ReasonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A categorized failure payload.
///
/// Equality is structural: two reasons are equal when message, kind and
/// context values all match.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("{kind}: {message}")]
pub struct Reason {
    message: String,

    #[serde(default)]
    kind: ReasonKind,

    /// Opaque diagnostic values. Never interpreted.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    values: Vec<serde_json::Value>,
}

impl Reason {
    /// Create a reason of the given kind.
    pub fn new(kind: ReasonKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
            values: Vec::new(),
        }
    }

    /// Create a reason after checking the message against `policy`.
    pub fn checked(
        policy: MessagePolicy,
        kind: ReasonKind,
        message: impl Into<String>,
    ) -> Result<Self, ReasonError> {
        let message = message.into();
        policy.check(kind, &message)?;
        Ok(Self::new(kind, message))
    }

    /// Generic error.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ReasonKind::Error, message)
    }

    /// Generic error carrying the message of a native error.
    pub fn from_error<E>(err: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        Self::error(err.to_string())
    }

    /// The requested item does not exist.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ReasonKind::NotFound, message)
    }

    /// A dependency is temporarily unavailable.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(ReasonKind::Unavailable, message)
    }

    /// Nothing to return.
    pub fn no_content(message: impl Into<String>) -> Self {
        Self::new(ReasonKind::NoContent, message)
    }

    /// The caller is not allowed to do this.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ReasonKind::Forbidden, message)
    }

    /// The caller is not authenticated.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ReasonKind::Unauthorized, message)
    }

    /// The input is invalid.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::new(ReasonKind::Invalid, message)
    }

    /// A specific argument is invalid.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ReasonKind::InvalidArgument, message)
    }

    /// The operation conflicts with current state.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ReasonKind::Conflict, message)
    }

    /// The item already exists.
    pub fn duplicate(message: impl Into<String>) -> Self {
        Self::new(ReasonKind::Duplicate, message)
    }

    /// Stored data is inconsistent.
    pub fn inconsistent(message: impl Into<String>) -> Self {
        Self::new(ReasonKind::Inconsistent, message)
    }

    /// Attach one context value.
    pub fn with_value(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.values.push(value.into());
        self
    }

    /// Attach several context values, keeping their order.
    pub fn with_values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<serde_json::Value>,
    {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The category.
    pub fn kind(&self) -> ReasonKind {
        self.kind
    }

    /// Context values, in the order they were attached.
    pub fn values(&self) -> &[serde_json::Value] {
        &self.values
    }
}

impl From<&str> for Reason {
    fn from(message: &str) -> Self {
        Self::error(message)
    }
}

impl From<String> for Reason {
    fn from(message: String) -> Self {
        Self::error(message)
    }
}
