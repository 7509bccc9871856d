//! Evaluation outcomes
//!
//! Every evaluation of a condition or a validation unit produces one fresh
//! [`Outcome`]. A failing outcome always carries exactly one [`Failure`]: the
//! first one found, in evaluation order.

use std::fmt;

use crate::error::{ErrorCode, ErrorPayload, FailureKind};
use crate::predicate::Rule;

/// The rule that stopped an evaluation and why.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Failure {
    rule: String,
    condition: Option<String>,
    kind: FailureKind,
    error: ErrorPayload,
}

impl Failure {
    pub(crate) fn from_rule(rule: &Rule, kind: FailureKind) -> Self {
        Failure {
            rule: rule.name().to_string(),
            condition: None,
            kind,
            error: rule.error().clone(),
        }
    }

    pub(crate) fn within(mut self, condition: &str) -> Self {
        self.condition = Some(condition.to_string());
        self
    }

    /// Name of the failing rule.
    pub fn rule(&self) -> &str {
        &self.rule
    }

    /// Name of the condition the rule belonged to, if any.
    pub fn condition(&self) -> Option<&str> {
        self.condition.as_deref()
    }

    /// Null input or plain mismatch.
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Whether the value was missing rather than wrong.
    pub fn is_null_input(&self) -> bool {
        self.kind == FailureKind::NullInput
    }

    /// The payload to display.
    pub fn error(&self) -> &ErrorPayload {
        &self.error
    }

    /// The literal message, if the payload is one.
    pub fn message(&self) -> Option<&str> {
        self.error.message()
    }

    /// The code, if the payload is one.
    pub fn code(&self) -> Option<&ErrorCode> {
        self.error.code()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FailureKind::Mismatch => write!(f, "{}", self.error),
            FailureKind::NullInput => write!(f, "{} ({})", self.error, self.kind),
        }
    }
}

/// Pass/fail verdict of one evaluation.
///
/// # Example
///
/// ```rust
/// use rulegate::{Condition, Outcome, RuleSetExt, Value};
///
/// let condition = Condition::all().minimum_length(3).digits_only();
/// assert_eq!(condition.evaluate(&Value::from("123")), Outcome::Pass);
///
/// let outcome = condition.evaluate(&Value::from("12"));
/// assert_eq!(outcome.message(), Some("Length must be at least 3"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[must_use]
pub enum Outcome {
    /// Every rule and condition passed.
    Pass,
    /// Evaluation stopped at this failure.
    Fail(Failure),
}

impl Outcome {
    /// Returns true for [`Outcome::Pass`].
    #[inline]
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }

    /// Returns true for [`Outcome::Fail`].
    #[inline]
    pub fn is_fail(&self) -> bool {
        !self.is_pass()
    }

    /// The failure, if any.
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Outcome::Pass => None,
            Outcome::Fail(failure) => Some(failure),
        }
    }

    /// The failing payload, if any.
    pub fn error(&self) -> Option<&ErrorPayload> {
        self.failure().map(Failure::error)
    }

    /// The failing message, if the outcome failed with one.
    pub fn message(&self) -> Option<&str> {
        self.failure().and_then(Failure::message)
    }

    /// The failing code, if the outcome failed with one.
    pub fn code(&self) -> Option<&ErrorCode> {
        self.failure().and_then(Failure::code)
    }

    /// Convert into a `Result`, keeping the failure as the error.
    pub fn into_result(self) -> Result<(), Failure> {
        match self {
            Outcome::Pass => Ok(()),
            Outcome::Fail(failure) => Err(failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(kind: FailureKind) -> Failure {
        let rule = Rule::min_length(3).build().unwrap();
        Failure::from_rule(&rule, kind)
    }

    #[test]
    fn failure_carries_rule_payload() {
        let f = failure(FailureKind::Mismatch);
        assert_eq!(f.rule(), "min_length");
        assert_eq!(f.message(), Some("Length must be at least 3"));
        assert_eq!(f.code(), None);
        assert_eq!(f.condition(), None);
        assert_eq!(f.within("password").condition(), Some("password"));
    }

    #[test]
    fn null_input_is_distinct_in_display() {
        assert_eq!(
            failure(FailureKind::Mismatch).to_string(),
            "Length must be at least 3"
        );
        assert_eq!(
            failure(FailureKind::NullInput).to_string(),
            "Length must be at least 3 (value is required)"
        );
    }

    #[test]
    fn outcome_accessors() {
        assert!(Outcome::Pass.is_pass());
        assert_eq!(Outcome::Pass.error(), None);
        assert_eq!(Outcome::Pass.into_result(), Ok(()));

        let out = Outcome::Fail(failure(FailureKind::NullInput));
        assert!(out.is_fail());
        assert!(out.failure().unwrap().is_null_input());
        assert!(out.into_result().is_err());
    }
}
