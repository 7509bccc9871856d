//! Validation units
//!
//! A [`ValidationUnit`] is bound to one candidate value. It holds standalone
//! rules and conditions in insertion order and turns them into one
//! [`Outcome`]:
//!
//! 1. standalone rules, in order, stopping at the first failure;
//! 2. then conditions, in order, stopping at the first failing condition.
//!
//! Nothing after the first failure is evaluated. Evaluation is a pure
//! function of the attached rules and the bound value, linear in the number
//! of rules, and never panics for a mismatched value.
//!
//! # Example
//!
//! ```rust
//! use rulegate::{Condition, RuleSetExt, ValidationUnit};
//!
//! let mut unit = ValidationUnit::new("char")
//!     .within_range(5, 10)?
//!     .attach(Condition::any().digits_only().alphabet_only());
//!
//! assert_eq!(unit.evaluate()?.message(), Some("Length must be between 5 and 10"));
//!
//! unit.set_value("7 chars");
//! assert_eq!(unit.evaluate()?.message(), Some("Value is not alphabetic"));
//!
//! unit.set_value("sevens");
//! assert!(unit.evaluate()?.is_pass());
//! # Ok::<(), rulegate::ConfigError>(())
//! ```

use std::fmt;
use std::sync::Arc;

use crate::condition::Condition;
use crate::error::ConfigError;
use crate::outcome::{Failure, Outcome};
use crate::predicate::{Rule, Verdict};
use crate::sink::{DisplaySink, Report};
use crate::{RuleSetExt, Value};

/// Something that can be attached to a [`ValidationUnit`].
#[derive(Debug, Clone)]
pub enum Attachment {
    /// A standalone rule.
    Rule(Rule),
    /// A condition grouping several rules.
    Condition(Condition),
}

impl From<Rule> for Attachment {
    fn from(rule: Rule) -> Self {
        Attachment::Rule(rule)
    }
}

impl From<Condition> for Attachment {
    fn from(condition: Condition) -> Self {
        Attachment::Condition(condition)
    }
}

/// Rules and conditions bound to one candidate value.
///
/// Populate it fully before the first evaluation. A unit is not meant to be
/// evaluated concurrently with itself; different units are independent.
#[derive(Clone, Default)]
pub struct ValidationUnit {
    label: Option<String>,
    value: Value,
    rules: Vec<Rule>,
    conditions: Vec<Condition>,
    sink: Option<Arc<dyn DisplaySink>>,
}

impl ValidationUnit {
    /// A unit bound to `value` with nothing attached.
    pub fn new(value: impl Into<Value>) -> Self {
        ValidationUnit {
            value: value.into(),
            ..Default::default()
        }
    }

    /// Label used in diagnostics and batch results.
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Report every [`evaluate`](Self::evaluate) to `sink`.
    pub fn with_sink(mut self, sink: Arc<dyn DisplaySink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Append a rule or a condition. Each call appends; order is kept.
    pub fn attach(mut self, attachment: impl Into<Attachment>) -> Self {
        match attachment.into() {
            Attachment::Rule(rule) => self.rules.push(rule),
            Attachment::Condition(condition) => self.conditions.push(condition),
        }
        self
    }

    /// Append an AND condition over `rules`.
    pub fn match_all_rules(self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.attach(Condition::all().add_all(rules))
    }

    /// Append an OR condition over `rules`.
    pub fn match_at_least_one_rule(self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.attach(Condition::any().add_all(rules))
    }

    /// Rebind the candidate value. Attached rules are kept.
    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = value.into();
    }

    /// The bound value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The label, if one was set.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Standalone rules, in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Conditions, in evaluation order.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Evaluate the bound value and report the outcome to the sink, if one
    /// is registered, exactly once.
    ///
    /// The only error is a sink that cannot render the outcome.
    pub fn evaluate(&self) -> Result<Outcome, ConfigError> {
        let outcome = self.check();
        if let Some(sink) = &self.sink {
            sink.report(&Report::from_outcome(&outcome))?;
        }
        Ok(outcome)
    }

    /// Evaluate the bound value without notifying the sink.
    pub fn check(&self) -> Outcome {
        let outcome = self.evaluate_value(&self.value);

        #[cfg(feature = "tracing")]
        match &outcome {
            Outcome::Pass => tracing::trace!(unit = ?self.label, "validation passed"),
            Outcome::Fail(failure) => tracing::debug!(
                unit = ?self.label,
                rule = failure.rule(),
                condition = ?failure.condition(),
                kind = ?failure.kind(),
                "validation failed"
            ),
        }

        outcome
    }

    fn evaluate_value(&self, value: &Value) -> Outcome {
        for rule in &self.rules {
            if let Verdict::Fail(kind) = rule.evaluate(value) {
                return Outcome::Fail(Failure::from_rule(rule, kind));
            }
        }
        for condition in &self.conditions {
            let outcome = condition.evaluate(value);
            if outcome.is_fail() {
                return outcome;
            }
        }
        Outcome::Pass
    }
}

impl RuleSetExt for ValidationUnit {
    fn push_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }
}

impl fmt::Debug for ValidationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationUnit")
            .field("label", &self.label)
            .field("value", &self.value)
            .field("rules", &self.rules)
            .field("conditions", &self.conditions)
            .field("sink", &self.sink.as_ref().map(|_| ".."))
            .finish()
    }
}
