//! The two-state Outcome container.
//!
//! An [`Outcome`] holds either a success payload or a failure payload, never
//! both and never neither. The state is fixed at construction; callers read
//! it through [`Outcome::branch`] or react to it with the `on_*` combinators.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{BranchKind, OutcomeError, Result};

/// Tagged view of an [`Outcome`], for pattern matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch<S, F> {
    /// The outcome succeeded with this value.
    Success(S),
    /// The outcome failed with this value.
    Failure(F),
}

impl<S, F> Branch<S, F> {
    /// Returns which slot is populated.
    pub fn kind(&self) -> BranchKind {
        match self {
            Branch::Success(_) => BranchKind::Success,
            Branch::Failure(_) => BranchKind::Failure,
        }
    }
}

/// Marks a bare value as a success payload for conversion into an [`Outcome`].
///
/// Works when the success and failure types are the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Success<S>(pub S);

/// Marks a bare value as a failure payload for conversion into an [`Outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Failure<F>(pub F);

/// Either a success value of type `S` or a failure value of type `F`.
///
/// Immutable once built. Reactions take the outcome by value and hand it
/// back unchanged so they can be chained:
///
/// ```
/// use verdict_core::Outcome;
///
/// let outcome: Outcome<u16, String> = Outcome::failure("Worthless".to_string());
/// outcome
///     .on_success(|_| unreachable!())
///     .on_failure(|reason| assert_eq!(reason, "Worthless"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Outcome<S, F> {
    branch: Branch<S, F>,
}

impl<S, F> Outcome<S, F> {
    /// Create a successful outcome.
    pub fn success(value: S) -> Self {
        Self {
            branch: Branch::Success(value),
        }
    }

    /// Create a failed outcome.
    pub fn failure(value: F) -> Self {
        Self {
            branch: Branch::Failure(value),
        }
    }

    /// Create a successful outcome from a value that may be absent.
    ///
    /// Returns [`OutcomeError::AbsentValue`] when `value` is `None`.
    pub fn try_success(value: Option<S>) -> Result<Self> {
        match value {
            Some(value) => Ok(Self::success(value)),
            None => Err(rejected_value(BranchKind::Success)),
        }
    }

    /// Create a failed outcome from a value that may be absent.
    ///
    /// Returns [`OutcomeError::AbsentValue`] when `value` is `None`.
    pub fn try_failure(value: Option<F>) -> Result<Self> {
        match value {
            Some(value) => Ok(Self::failure(value)),
            None => Err(rejected_value(BranchKind::Failure)),
        }
    }

    /// Borrow the tagged view of this outcome.
    pub fn branch(&self) -> Branch<&S, &F> {
        match &self.branch {
            Branch::Success(value) => Branch::Success(value),
            Branch::Failure(value) => Branch::Failure(value),
        }
    }

    /// Consume the outcome into its tagged view.
    pub fn into_branch(self) -> Branch<S, F> {
        self.branch
    }

    /// Returns which slot is populated.
    pub fn kind(&self) -> BranchKind {
        self.branch.kind()
    }

    /// Check if the outcome is a success.
    pub fn is_success(&self) -> bool {
        matches!(self.branch, Branch::Success(_))
    }

    /// Check if the outcome is a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self.branch, Branch::Failure(_))
    }

    /// Returns the success value, if any.
    pub fn success_value(&self) -> Option<&S> {
        match &self.branch {
            Branch::Success(value) => Some(value),
            Branch::Failure(_) => None,
        }
    }

    /// Returns the failure value, if any.
    pub fn failure_value(&self) -> Option<&F> {
        match &self.branch {
            Branch::Success(_) => None,
            Branch::Failure(value) => Some(value),
        }
    }

    /// Returns both slots. Exactly one of them is `Some`.
    pub fn parts(&self) -> (Option<&S>, Option<&F>) {
        (self.success_value(), self.failure_value())
    }

    /// Consume the outcome, keeping only the success value.
    pub fn into_success(self) -> Option<S> {
        match self.branch {
            Branch::Success(value) => Some(value),
            Branch::Failure(_) => None,
        }
    }

    /// Consume the outcome, keeping only the failure value.
    pub fn into_failure(self) -> Option<F> {
        match self.branch {
            Branch::Success(_) => None,
            Branch::Failure(value) => Some(value),
        }
    }

    /// Converts into a standard `Result`.
    pub fn into_result(self) -> std::result::Result<S, F> {
        match self.branch {
            Branch::Success(value) => Ok(value),
            Branch::Failure(value) => Err(value),
        }
    }

    /// Borrow as a standard `Result`.
    pub fn as_result(&self) -> std::result::Result<&S, &F> {
        match &self.branch {
            Branch::Success(value) => Ok(value),
            Branch::Failure(value) => Err(value),
        }
    }

    /// Run `reaction` with the success value if this is a success.
    pub fn on_success<R>(self, reaction: R) -> Self
    where
        R: FnOnce(&S),
    {
        if let Branch::Success(value) = &self.branch {
            trace!(branch = %BranchKind::Success, "running reaction");
            reaction(value);
        }
        self
    }

    /// Run `reaction` if this is a success, ignoring the value.
    pub fn on_success_do<R>(self, reaction: R) -> Self
    where
        R: FnOnce(),
    {
        self.on_success(|_| reaction())
    }

    /// Run `reaction` with the failure value if this is a failure.
    pub fn on_failure<R>(self, reaction: R) -> Self
    where
        R: FnOnce(&F),
    {
        if let Branch::Failure(value) = &self.branch {
            trace!(branch = %BranchKind::Failure, "running reaction");
            reaction(value);
        }
        self
    }

    /// Run `reaction` if this is a failure, ignoring the value.
    pub fn on_failure_do<R>(self, reaction: R) -> Self
    where
        R: FnOnce(),
    {
        self.on_failure(|_| reaction())
    }

    /// Like [`on_success`](Self::on_success) for a reaction that may be absent.
    ///
    /// A missing reaction is rejected before the state is looked at.
    pub fn try_on_success<R>(self, reaction: Option<R>) -> Result<Self>
    where
        R: FnOnce(&S),
    {
        match reaction {
            Some(reaction) => Ok(self.on_success(reaction)),
            None => Err(rejected_reaction(BranchKind::Success)),
        }
    }

    /// Like [`on_failure`](Self::on_failure) for a reaction that may be absent.
    ///
    /// A missing reaction is rejected before the state is looked at.
    pub fn try_on_failure<R>(self, reaction: Option<R>) -> Result<Self>
    where
        R: FnOnce(&F),
    {
        match reaction {
            Some(reaction) => Ok(self.on_failure(reaction)),
            None => Err(rejected_reaction(BranchKind::Failure)),
        }
    }

    /// Maps the success value, leaving a failure untouched.
    pub fn map<T, M>(self, op: M) -> Outcome<T, F>
    where
        M: FnOnce(S) -> T,
    {
        match self.branch {
            Branch::Success(value) => Outcome::success(op(value)),
            Branch::Failure(value) => Outcome::failure(value),
        }
    }

    /// Maps the failure value, leaving a success untouched.
    pub fn map_failure<G, M>(self, op: M) -> Outcome<S, G>
    where
        M: FnOnce(F) -> G,
    {
        match self.branch {
            Branch::Success(value) => Outcome::success(value),
            Branch::Failure(value) => Outcome::failure(op(value)),
        }
    }

    /// Chains another step on success.
    pub fn and_then<T, M>(self, op: M) -> Outcome<T, F>
    where
        M: FnOnce(S) -> Outcome<T, F>,
    {
        match self.branch {
            Branch::Success(value) => op(value),
            Branch::Failure(value) => Outcome::failure(value),
        }
    }

    /// Returns the success value or `default`.
    pub fn unwrap_or(self, default: S) -> S {
        self.into_success().unwrap_or(default)
    }

    /// Returns the success value or computes one from the failure.
    pub fn unwrap_or_else<M>(self, op: M) -> S
    where
        M: FnOnce(F) -> S,
    {
        match self.branch {
            Branch::Success(value) => value,
            Branch::Failure(value) => op(value),
        }
    }
}

fn rejected_value(branch: BranchKind) -> OutcomeError {
    debug!(%branch, "rejected absent outcome value");
    OutcomeError::AbsentValue { branch }
}

fn rejected_reaction(branch: BranchKind) -> OutcomeError {
    debug!(%branch, "rejected missing reaction");
    OutcomeError::MissingReaction { branch }
}

impl<S, F> From<Success<S>> for Outcome<S, F> {
    fn from(value: Success<S>) -> Self {
        Outcome::success(value.0)
    }
}

impl<S, F> From<Failure<F>> for Outcome<S, F> {
    fn from(value: Failure<F>) -> Self {
        Outcome::failure(value.0)
    }
}

impl<S, F> From<std::result::Result<S, F>> for Outcome<S, F> {
    fn from(result: std::result::Result<S, F>) -> Self {
        match result {
            Ok(value) => Outcome::success(value),
            Err(value) => Outcome::failure(value),
        }
    }
}

impl<S, F> From<Outcome<S, F>> for std::result::Result<S, F> {
    fn from(outcome: Outcome<S, F>) -> Self {
        outcome.into_result()
    }
}

impl<S, F> From<Branch<S, F>> for Outcome<S, F> {
    fn from(branch: Branch<S, F>) -> Self {
        Self { branch }
    }
}

impl<S, F> From<Outcome<S, F>> for Branch<S, F> {
    fn from(outcome: Outcome<S, F>) -> Self {
        outcome.branch
    }
}

impl<S: fmt::Display, F: fmt::Display> fmt::Display for Outcome<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.branch {
            Branch::Success(value) => write!(f, "success: {}", value),
            Branch::Failure(value) => write!(f, "failure: {}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn call_api(url: &str) -> Outcome<u16, String> {
        if url.is_empty() {
            return Failure("Url cannot be blank".to_string()).into();
        }

        Success(200).into()
    }

    #[test]
    fn test_success_queries() {
        let outcome: Outcome<i32, String> = Outcome::success(1);

        assert!(outcome.is_success());
        assert!(!outcome.is_failure());
        assert_eq!(outcome.kind(), BranchKind::Success);
        assert_eq!(outcome.success_value(), Some(&1));
        assert_eq!(outcome.failure_value(), None);
        assert_eq!(outcome.parts(), (Some(&1), None));
        assert_eq!(outcome.branch(), Branch::Success(&1));
    }

    #[test]
    fn test_failure_queries() {
        let outcome: Outcome<String, String> = Outcome::failure("Wrong".to_string());

        assert!(!outcome.is_success());
        assert!(outcome.is_failure());
        assert_eq!(outcome.success_value(), None);
        assert_eq!(outcome.failure_value().map(String::as_str), Some("Wrong"));

        match outcome.parts() {
            (None, Some(reason)) => assert_eq!(reason, "Wrong"),
            other => panic!("unexpected parts: {:?}", other),
        }
    }

    #[test]
    fn test_absent_values_are_rejected() {
        let err = Outcome::<i32, String>::try_success(None).unwrap_err();
        assert_eq!(
            err,
            OutcomeError::AbsentValue {
                branch: BranchKind::Success
            }
        );

        let err = Outcome::<i32, String>::try_failure(None).unwrap_err();
        assert_eq!(
            err,
            OutcomeError::AbsentValue {
                branch: BranchKind::Failure
            }
        );
    }

    #[test]
    fn test_present_values_are_accepted() {
        let outcome = Outcome::<i32, String>::try_success(Some(7)).unwrap();
        assert_eq!(outcome.into_success(), Some(7));

        let outcome = Outcome::<i32, String>::try_failure(Some(String::new())).unwrap();
        assert!(outcome.is_failure());
    }

    #[test]
    fn test_failure_reaction_receives_payload() {
        let outcome: Outcome<String, String> = Outcome::failure("Worthless".to_string());

        outcome
            .on_success(|_| panic!("success reaction must not run"))
            .on_failure(|actual| assert_eq!(actual, "Worthless"));
    }

    #[test]
    fn test_exactly_one_reaction_fires() {
        let outcomes: [Outcome<bool, &str>; 2] =
            [Outcome::success(true), Outcome::failure("no")];

        for outcome in outcomes {
            let counter = Cell::new(0);
            outcome
                .on_success_do(|| counter.set(counter.get() + 1))
                .on_failure_do(|| counter.set(counter.get() + 1));
            assert_eq!(counter.get(), 1);

            let counter = Cell::new(0);
            outcome
                .on_failure(|_| counter.set(counter.get() + 1))
                .on_success(|_| counter.set(counter.get() + 1));
            assert_eq!(counter.get(), 1);
        }
    }

    #[test]
    fn test_reactions_run_in_call_order() {
        let log = std::cell::RefCell::new(Vec::new());
        let outcome: Outcome<i32, String> = Outcome::success(5);

        let outcome = outcome
            .on_success(|v| log.borrow_mut().push(*v))
            .on_failure(|_| log.borrow_mut().push(-1))
            .on_success(|v| log.borrow_mut().push(v * 2));

        assert_eq!(*log.borrow(), vec![5, 10]);
        assert_eq!(outcome, Outcome::success(5));
    }

    #[test]
    fn test_missing_reaction_is_rejected_in_either_state() {
        let success: Outcome<bool, String> = Outcome::success(false);
        let err = success.try_on_success(None::<fn(&bool)>).unwrap_err();
        assert_eq!(
            err,
            OutcomeError::MissingReaction {
                branch: BranchKind::Success
            }
        );

        let failure: Outcome<bool, String> = Outcome::failure(String::new());
        let err = failure.clone().try_on_success(None::<fn(&bool)>).unwrap_err();
        assert_eq!(err.branch(), BranchKind::Success);

        let err = failure.try_on_failure(None::<fn(&String)>).unwrap_err();
        assert_eq!(
            err,
            OutcomeError::MissingReaction {
                branch: BranchKind::Failure
            }
        );
    }

    #[test]
    fn test_present_optional_reaction_runs() {
        let seen = Cell::new(None);
        let outcome: Outcome<i32, String> = Outcome::success(3);

        let outcome = outcome
            .try_on_success(Some(|v: &i32| seen.set(Some(*v))))
            .unwrap();

        assert_eq!(seen.get(), Some(3));
        assert!(outcome.is_success());
    }

    #[test]
    fn test_conversion_selects_branch() {
        let counter = Cell::new(0);

        call_api("")
            .on_success_do(|| panic!("blank url must fail"))
            .on_failure(|actual| {
                counter.set(counter.get() + 1);
                assert_eq!(actual, "Url cannot be blank");
            });

        call_api("http://somedomain.com")
            .on_success(|code| {
                counter.set(counter.get() + 1);
                assert_eq!(*code, 200);
            })
            .on_failure_do(|| panic!("valid url must succeed"));

        assert_eq!(counter.get(), 2);
    }

    #[test]
    fn test_conversion_with_same_types() {
        let ok: Outcome<String, String> = Success("value".to_string()).into();
        let bad: Outcome<String, String> = Failure("value".to_string()).into();

        assert!(ok.is_success());
        assert!(bad.is_failure());
        assert_ne!(ok, bad);
    }

    #[test]
    fn test_result_round_trip() {
        let outcome: Outcome<i32, String> = Ok(42).into();
        assert_eq!(outcome.success_value(), Some(&42));
        assert_eq!(outcome.as_result(), Ok(&42));

        let result: std::result::Result<i32, String> = outcome.into();
        assert_eq!(result, Ok(42));

        let outcome: Outcome<i32, String> = Err("nope".to_string()).into();
        assert_eq!(outcome.into_result(), Err("nope".to_string()));
    }

    #[test]
    fn test_branch_round_trip() {
        let outcome: Outcome<i32, &str> = Branch::Failure("bad").into();
        assert_eq!(outcome.kind(), BranchKind::Failure);

        match outcome.into_branch() {
            Branch::Failure(reason) => assert_eq!(reason, "bad"),
            Branch::Success(_) => panic!("expected failure"),
        }
    }

    #[test]
    fn test_map_and_then() {
        let outcome: Outcome<i32, String> = Outcome::success(2);
        let doubled = outcome.map(|v| v * 2);
        assert_eq!(doubled.success_value(), Some(&4));

        let chained = doubled.and_then(|v| {
            if v > 3 {
                Outcome::failure(format!("{} is too big", v))
            } else {
                Outcome::success(v)
            }
        });
        assert_eq!(chained.failure_value().map(String::as_str), Some("4 is too big"));

        let lengths = chained.map_failure(|reason| reason.len());
        assert_eq!(lengths.failure_value(), Some(&12));
        assert_eq!(lengths.unwrap_or_else(|len| len as i32), 12);
    }

    #[test]
    fn test_unwrap_or() {
        let outcome: Outcome<i32, &str> = Outcome::failure("missing");
        assert_eq!(outcome.unwrap_or(9), 9);

        let outcome: Outcome<i32, &str> = Outcome::success(1);
        assert_eq!(outcome.unwrap_or(9), 1);
    }

    #[test]
    fn test_display() {
        let outcome: Outcome<i32, &str> = Outcome::success(200);
        assert_eq!(outcome.to_string(), "success: 200");

        let outcome: Outcome<i32, &str> = Outcome::failure("gone");
        assert_eq!(outcome.to_string(), "failure: gone");
    }

    #[test]
    fn test_serialization_shape() {
        let outcome: Outcome<u16, String> = Outcome::success(200);
        let json = serde_json::to_value(outcome).unwrap();
        assert_eq!(json, serde_json::json!({ "success": 200 }));

        let outcome: Outcome<u16, String> =
            serde_json::from_value(serde_json::json!({ "failure": "down" })).unwrap();
        assert_eq!(outcome.failure_value().map(String::as_str), Some("down"));
    }

    #[test]
    fn test_deserialize_rejects_both_slots() {
        let parsed: serde_json::Result<Outcome<u16, String>> =
            serde_json::from_value(serde_json::json!({ "success": 1, "failure": "x" }));
        assert!(parsed.is_err());
    }
}
