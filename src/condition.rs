//! Boolean conditions over rules
//!
//! A [`Condition`] groups rules under one operator. AND stops at the first
//! failing rule and reports it. OR stops at the first passing rule; when none
//! passes, every rule has been evaluated and the **last** failure is
//! reported.
//!
//! An empty condition passes under either operator.
//!
//! # Example
//!
//! ```rust
//! use rulegate::{Condition, RuleSetExt, Value};
//!
//! let id = Condition::any()
//!     .named("id")
//!     .digits_only()
//!     .starts_with("user-", false);
//!
//! assert!(id.evaluate(&Value::from("12345")).is_pass());
//! assert!(id.evaluate(&Value::from("user-abc")).is_pass());
//!
//! let outcome = id.evaluate(&Value::from("guest"));
//! assert_eq!(outcome.message(), Some("Value does not start with user-"));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::outcome::{Failure, Outcome};
use crate::predicate::{Rule, Verdict};
use crate::Value;

/// How a condition combines its rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Operator {
    /// Every rule must pass.
    And,
    /// At least one rule must pass.
    Or,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::And => f.write_str("and"),
            Operator::Or => f.write_str("or"),
        }
    }
}

impl FromStr for Operator {
    type Err = ConfigError;

    /// Accepts `and`/`all` and `or`/`any`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "and" | "all" => Ok(Operator::And),
            "or" | "any" => Ok(Operator::Or),
            _ => Err(ConfigError::UnknownOperator(s.to_string())),
        }
    }
}

/// A named, ordered group of rules combined by an [`Operator`].
///
/// Built once and evaluated any number of times; holds no state between
/// evaluations.
#[derive(Debug, Clone)]
pub struct Condition {
    name: String,
    operator: Operator,
    rules: Vec<Rule>,
}

impl Condition {
    /// An empty condition with the given operator.
    pub fn new(operator: Operator) -> Self {
        Condition {
            name: operator.to_string(),
            operator,
            rules: Vec::new(),
        }
    }

    /// An empty AND condition.
    pub fn all() -> Self {
        Self::new(Operator::And)
    }

    /// An empty OR condition.
    pub fn any() -> Self {
        Self::new(Operator::Or)
    }

    /// Set the diagnostic name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Append one rule.
    pub fn add(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append rules in order.
    pub fn add_all(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Diagnostic name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The combining operator.
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// The rules, in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Evaluate against a value.
    pub fn evaluate(&self, value: &Value) -> Outcome {
        let outcome = match self.operator {
            Operator::And => self.evaluate_and(value),
            Operator::Or => self.evaluate_or(value),
        };

        #[cfg(feature = "tracing")]
        if let Outcome::Fail(failure) = &outcome {
            tracing::debug!(
                condition = %self.name,
                operator = %self.operator,
                rule = failure.rule(),
                "condition failed"
            );
        }

        outcome
    }

    fn evaluate_and(&self, value: &Value) -> Outcome {
        for rule in &self.rules {
            if let Verdict::Fail(kind) = rule.evaluate(value) {
                return Outcome::Fail(Failure::from_rule(rule, kind).within(&self.name));
            }
        }
        Outcome::Pass
    }

    fn evaluate_or(&self, value: &Value) -> Outcome {
        let mut last = None;
        for rule in &self.rules {
            match rule.evaluate(value) {
                Verdict::Pass => return Outcome::Pass,
                Verdict::Fail(kind) => last = Some(Failure::from_rule(rule, kind)),
            }
        }
        match last {
            Some(failure) => Outcome::Fail(failure.within(&self.name)),
            None => Outcome::Pass,
        }
    }
}

impl crate::RuleSetExt for Condition {
    fn push_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }
}
