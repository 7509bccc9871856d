//! Named rules
//!
//! A [`Rule`] pairs a check with the error payload it reports. Rules are
//! built once through a [`RuleBuilder`], which is where every configuration
//! mistake surfaces, and are immutable afterwards.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use super::combinators::Predicate;
use super::string::{Keyword, TextCheck};
use crate::error::{ConfigError, ErrorCode, ErrorPayload, FailureKind};
use crate::Value;

/// Result of evaluating a single rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The value satisfies the rule.
    Pass,
    /// The value does not satisfy the rule.
    Fail(FailureKind),
}

impl Verdict {
    /// Returns true for [`Verdict::Pass`].
    #[inline]
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

/// What a rule checks.
#[derive(Clone)]
pub enum RuleKind {
    /// One of the built-in text checks.
    Text(TextCheck),
    /// Every nested rule must pass.
    AllOf(Vec<Rule>),
    /// At least one nested rule must pass.
    AnyOf(Vec<Rule>),
    /// The nested rule must fail.
    Not(Box<Rule>),
    /// A caller-supplied predicate.
    Custom(Arc<dyn Predicate>),
}

impl RuleKind {
    fn name(&self) -> &'static str {
        match self {
            RuleKind::Text(check) => check.name(),
            RuleKind::AllOf(_) => "all_of",
            RuleKind::AnyOf(_) => "any_of",
            RuleKind::Not(_) => "not",
            RuleKind::Custom(_) => "custom",
        }
    }

    fn default_message(&self) -> Option<String> {
        match self {
            RuleKind::Text(check) => Some(check.default_message()),
            RuleKind::AllOf(_) => Some("Value does not satisfy all rules".to_string()),
            RuleKind::AnyOf(_) => Some("Value does not satisfy any rule".to_string()),
            RuleKind::Not(_) => Some("Value satisfies a forbidden rule".to_string()),
            RuleKind::Custom(_) => None,
        }
    }

    // Composites defer to their members so each member's verdict on null applies.
    fn accepts_null(&self) -> bool {
        match self {
            RuleKind::Text(_) => false,
            RuleKind::AllOf(rules) => rules.iter().all(|r| r.kind.accepts_null()),
            RuleKind::AnyOf(rules) => rules.iter().any(|r| r.kind.accepts_null()),
            RuleKind::Not(rule) => rule.kind.accepts_null(),
            RuleKind::Custom(p) => p.accepts_null(),
        }
    }

    fn check(&self, value: &Value) -> bool {
        match self {
            RuleKind::Text(check) => check.check(value),
            RuleKind::AllOf(rules) => rules.iter().all(|r| r.evaluate(value).is_pass()),
            RuleKind::AnyOf(rules) => rules.iter().any(|r| r.evaluate(value).is_pass()),
            RuleKind::Not(rule) => !rule.evaluate(value).is_pass(),
            RuleKind::Custom(p) => p.check(value),
        }
    }
}

impl fmt::Debug for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::Text(check) => f.debug_tuple("Text").field(check).finish(),
            RuleKind::AllOf(rules) => f.debug_tuple("AllOf").field(rules).finish(),
            RuleKind::AnyOf(rules) => f.debug_tuple("AnyOf").field(rules).finish(),
            RuleKind::Not(rule) => f.debug_tuple("Not").field(rule).finish(),
            RuleKind::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A named check plus the error payload it reports on failure.
///
/// # Example
///
/// ```rust
/// use rulegate::{ErrorPayload, FailureKind, Rule, Value, Verdict};
///
/// let rule = Rule::length(5, 10).build().unwrap();
/// assert_eq!(rule.evaluate(&Value::from("7 chars")), Verdict::Pass);
/// assert_eq!(
///     rule.evaluate(&Value::from("char")),
///     Verdict::Fail(FailureKind::Mismatch)
/// );
/// assert_eq!(
///     rule.error(),
///     &ErrorPayload::Message("Length must be between 5 and 10".into())
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Rule {
    name: String,
    kind: RuleKind,
    error: ErrorPayload,
}

impl Rule {
    /// Start building a rule of the given kind.
    pub fn builder(kind: RuleKind) -> RuleBuilder {
        RuleBuilder::new(Ok(kind))
    }

    /// Length between `min` and `max` chars, inclusive.
    ///
    /// Building fails with `InvertedBounds` when `min > max`.
    pub fn length(min: usize, max: usize) -> RuleBuilder {
        if min > max {
            return RuleBuilder::new(Err(ConfigError::InvertedBounds { min, max }));
        }
        Self::text(TextCheck::Length { min, max })
    }

    /// Length of at least `min` chars.
    pub fn min_length(min: usize) -> RuleBuilder {
        Self::text(TextCheck::MinLength(min))
    }

    /// Length of at most `max` chars.
    pub fn max_length(max: usize) -> RuleBuilder {
        Self::text(TextCheck::MaxLength(max))
    }

    /// Text contains `keyword`.
    pub fn contains(keyword: impl Into<String>, ignore_case: bool) -> RuleBuilder {
        Self::text(TextCheck::Contains(Keyword::new(keyword, ignore_case)))
    }

    /// Text does not contain `keyword`.
    pub fn not_contains(keyword: impl Into<String>, ignore_case: bool) -> RuleBuilder {
        Self::text(TextCheck::NotContains(Keyword::new(keyword, ignore_case)))
    }

    /// Text equals `keyword`.
    pub fn equal_to(keyword: impl Into<String>) -> RuleBuilder {
        Self::text(TextCheck::EqualTo(keyword.into()))
    }

    /// Text differs from `keyword`.
    pub fn not_equal_to(keyword: impl Into<String>) -> RuleBuilder {
        Self::text(TextCheck::NotEqualTo(keyword.into()))
    }

    /// Text starts with `keyword`.
    pub fn starts_with(keyword: impl Into<String>, ignore_case: bool) -> RuleBuilder {
        Self::text(TextCheck::StartsWith(Keyword::new(keyword, ignore_case)))
    }

    /// Text ends with `keyword`.
    pub fn ends_with(keyword: impl Into<String>, ignore_case: bool) -> RuleBuilder {
        Self::text(TextCheck::EndsWith(Keyword::new(keyword, ignore_case)))
    }

    /// Text has no lowercase letters.
    pub fn all_uppercase() -> RuleBuilder {
        Self::text(TextCheck::AllUppercase)
    }

    /// Text has no uppercase letters.
    pub fn all_lowercase() -> RuleBuilder {
        Self::text(TextCheck::AllLowercase)
    }

    /// Only ASCII letters and digits.
    pub fn alphanumeric_only() -> RuleBuilder {
        Self::text(TextCheck::AlphanumericOnly)
    }

    /// Only ASCII letters.
    pub fn alphabet_only() -> RuleBuilder {
        Self::text(TextCheck::AlphabetOnly)
    }

    /// Only ASCII digits.
    pub fn digits_only() -> RuleBuilder {
        Self::text(TextCheck::DigitsOnly)
    }

    /// At least one char that is not alphanumeric or whitespace.
    pub fn contains_symbols() -> RuleBuilder {
        Self::text(TextCheck::ContainsSymbols)
    }

    /// Text matches `pattern`.
    ///
    /// Building fails with `InvalidPattern` when the pattern does not compile.
    pub fn matching(pattern: &str) -> RuleBuilder {
        match Regex::new(pattern) {
            Ok(re) => Self::text(TextCheck::Matches(re)),
            Err(source) => RuleBuilder::new(Err(ConfigError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })),
        }
    }

    /// Every rule in `rules` must pass.
    pub fn all_of(rules: impl IntoIterator<Item = Rule>) -> RuleBuilder {
        Self::builder(RuleKind::AllOf(rules.into_iter().collect()))
    }

    /// At least one rule in `rules` must pass.
    pub fn any_of(rules: impl IntoIterator<Item = Rule>) -> RuleBuilder {
        Self::builder(RuleKind::AnyOf(rules.into_iter().collect()))
    }

    /// `rule` must fail.
    pub fn not(rule: Rule) -> RuleBuilder {
        Self::builder(RuleKind::Not(Box::new(rule)))
    }

    /// A caller-supplied predicate. Needs an explicit message or code.
    ///
    /// ```rust
    /// use rulegate::{Rule, Value};
    ///
    /// let rule = Rule::custom(|v: &Value| v.text().is_some_and(|t| t.contains('@')))
    ///     .named("email_ish")
    ///     .message("Not an address")
    ///     .build()
    ///     .unwrap();
    /// assert!(rule.evaluate(&Value::from("a@b")).is_pass());
    ///
    /// assert!(Rule::custom(|_: &Value| true).build().is_err());
    /// ```
    pub fn custom(predicate: impl Predicate + 'static) -> RuleBuilder {
        Self::builder(RuleKind::Custom(Arc::new(predicate)))
    }

    fn text(check: TextCheck) -> RuleBuilder {
        Self::builder(RuleKind::Text(check))
    }

    /// A built-in check with its default name and message.
    pub(crate) fn from_check(check: TextCheck) -> Rule {
        Rule {
            name: check.name().to_string(),
            error: ErrorPayload::Message(check.default_message()),
            kind: RuleKind::Text(check),
        }
    }

    /// Diagnostic label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// What this rule checks.
    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    /// The payload reported when this rule fails.
    pub fn error(&self) -> &ErrorPayload {
        &self.error
    }

    /// Evaluate the rule against a value.
    ///
    /// Never panics for a mismatched value. A null value fails with
    /// [`FailureKind::NullInput`] unless the check accepts null.
    pub fn evaluate(&self, value: &Value) -> Verdict {
        let verdict = if value.is_null() && !self.kind.accepts_null() {
            Verdict::Fail(FailureKind::NullInput)
        } else if self.kind.check(value) {
            Verdict::Pass
        } else {
            Verdict::Fail(FailureKind::Mismatch)
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(rule = %self.name, ?verdict, "rule evaluated");

        verdict
    }
}

/// Builder for [`Rule`].
///
/// Exactly one error payload ends up on the rule: the configured message,
/// the configured code, or the kind's default message. Configuring both a
/// message and a code is an error, as is configuring neither on a kind
/// without a default.
#[derive(Debug)]
#[must_use = "a rule builder does nothing until `build` is called"]
pub struct RuleBuilder {
    kind: Result<RuleKind, ConfigError>,
    name: Option<String>,
    message: Option<String>,
    code: Option<ErrorCode>,
}

impl RuleBuilder {
    fn new(kind: Result<RuleKind, ConfigError>) -> Self {
        RuleBuilder {
            kind,
            name: None,
            message: None,
            code: None,
        }
    }

    /// Override the diagnostic name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Report this message on failure.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Report this code on failure.
    pub fn code(mut self, code: impl Into<ErrorCode>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Finish the rule, validating its configuration.
    ///
    /// ```rust
    /// use rulegate::{ConfigError, Rule};
    ///
    /// let err = Rule::length(10, 5).build().unwrap_err();
    /// assert!(matches!(err, ConfigError::InvertedBounds { min: 10, max: 5 }));
    ///
    /// let err = Rule::digits_only().message("m").code("c").build().unwrap_err();
    /// assert!(matches!(err, ConfigError::ConflictingErrorPayload { .. }));
    /// ```
    pub fn build(self) -> Result<Rule, ConfigError> {
        let kind = self.kind?;
        let name = self.name.unwrap_or_else(|| kind.name().to_string());
        let error = match (self.message, self.code) {
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingErrorPayload { rule: name }),
            (Some(message), None) => ErrorPayload::Message(message),
            (None, Some(code)) => ErrorPayload::Code(code),
            (None, None) => match kind.default_message() {
                Some(message) => ErrorPayload::Message(message),
                None => return Err(ConfigError::MissingErrorPayload { rule: name }),
            },
        };
        Ok(Rule { name, kind, error })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_length_message() {
        let rule = Rule::length(5, 10).build().unwrap();
        assert_eq!(rule.name(), "length");
        assert_eq!(
            rule.error(),
            &ErrorPayload::Message("Length must be between 5 and 10".into())
        );
    }

    #[test]
    fn custom_message_replaces_default() {
        let rule = Rule::length(5, 10)
            .message("This is a custom error message")
            .build()
            .unwrap();
        assert_eq!(rule.error().message(), Some("This is a custom error message"));
    }

    #[test]
    fn custom_code_replaces_default() {
        let rule = Rule::length(5, 10).code("length.range").build().unwrap();
        assert_eq!(rule.error(), &ErrorPayload::Code(ErrorCode::new("length.range")));
    }

    #[test]
    fn inverted_bounds_rejected() {
        assert!(matches!(
            Rule::length(10, 5).build(),
            Err(ConfigError::InvertedBounds { min: 10, max: 5 })
        ));
        assert!(Rule::length(5, 5).build().is_ok());
    }

    #[test]
    fn both_payloads_rejected() {
        let err = Rule::contains("a", false)
            .named("has_a")
            .message("m")
            .code("c")
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::ConflictingErrorPayload { rule } if rule == "has_a"));
    }

    #[test]
    fn custom_without_payload_rejected() {
        let err = Rule::custom(|_: &Value| true).build().unwrap_err();
        assert!(matches!(err, ConfigError::MissingErrorPayload { rule } if rule == "custom"));
    }

    #[test]
    fn bad_pattern_rejected() {
        assert!(matches!(
            Rule::matching("[unclosed").build(),
            Err(ConfigError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn null_is_its_own_failure() {
        let rule = Rule::length(5, 10).build().unwrap();
        assert_eq!(
            rule.evaluate(&Value::Null),
            Verdict::Fail(FailureKind::NullInput)
        );
    }

    #[test]
    fn nullable_custom_sees_null() {
        use crate::predicate::PredicateExt;

        let rule = Rule::custom((|v: &Value| v.is_null()).nullable())
            .message("must be empty")
            .build()
            .unwrap();
        assert_eq!(rule.evaluate(&Value::Null), Verdict::Pass);
        assert_eq!(
            rule.evaluate(&Value::from("x")),
            Verdict::Fail(FailureKind::Mismatch)
        );
    }

    #[test]
    fn composites_defer_null_to_their_members() {
        use crate::predicate::PredicateExt;

        let empty = Rule::custom((|v: &Value| v.is_null()).nullable())
            .named("empty")
            .message("must be empty")
            .build()
            .unwrap();
        let short = Rule::max_length(3).build().unwrap();

        let either = Rule::any_of([short.clone(), empty.clone()]).build().unwrap();
        assert_eq!(either.evaluate(&Value::Null), Verdict::Pass);

        let both = Rule::all_of([short.clone(), empty.clone()]).build().unwrap();
        assert_eq!(both.evaluate(&Value::Null), Verdict::Fail(FailureKind::NullInput));

        let only_nullable = Rule::all_of([empty.clone()]).build().unwrap();
        assert_eq!(only_nullable.evaluate(&Value::Null), Verdict::Pass);

        let present = Rule::not(empty).build().unwrap();
        assert_eq!(present.evaluate(&Value::Null), Verdict::Fail(FailureKind::Mismatch));
        assert_eq!(present.evaluate(&Value::from("x")), Verdict::Pass);

        let long = Rule::not(short).build().unwrap();
        assert_eq!(long.evaluate(&Value::Null), Verdict::Fail(FailureKind::NullInput));
    }

    #[test]
    fn any_of_agrees_with_an_or_condition_on_null() {
        use crate::predicate::PredicateExt;
        use crate::Condition;

        let members = [
            Rule::digits_only().build().unwrap(),
            Rule::custom((|v: &Value| v.is_null()).nullable())
                .message("must be empty")
                .build()
                .unwrap(),
        ];
        let rule = Rule::any_of(members.clone()).build().unwrap();
        let condition = Condition::any().add_all(members);

        assert!(rule.evaluate(&Value::Null).is_pass());
        assert!(condition.evaluate(&Value::Null).is_pass());
    }

    #[test]
    fn composites() {
        let short = Rule::max_length(3).build().unwrap();
        let digits = Rule::digits_only().build().unwrap();

        let both = Rule::all_of([short.clone(), digits.clone()]).build().unwrap();
        assert!(both.evaluate(&Value::from("123")).is_pass());
        assert!(!both.evaluate(&Value::from("1234")).is_pass());

        let either = Rule::any_of([short.clone(), digits]).build().unwrap();
        assert!(either.evaluate(&Value::from("12345")).is_pass());
        assert!(!either.evaluate(&Value::from("abcd")).is_pass());

        let long = Rule::not(short).build().unwrap();
        assert!(long.evaluate(&Value::from("abcd")).is_pass());
        assert_eq!(long.error().message(), Some("Value satisfies a forbidden rule"));
    }

    #[test]
    fn composite_of_nothing() {
        let all = Rule::all_of([]).build().unwrap();
        let any = Rule::any_of([]).build().unwrap();
        assert!(all.evaluate(&Value::from("x")).is_pass());
        assert!(!any.evaluate(&Value::from("x")).is_pass());
    }
}
