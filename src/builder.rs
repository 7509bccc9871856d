//! Chainable rule builders
//!
//! [`RuleSetExt`] gives every rule container the same fluent vocabulary, so
//! a [`Condition`](crate::Condition) and a
//! [`ValidationUnit`](crate::ValidationUnit) are built the same way. Each
//! method appends one rule with its default name and message; reach for
//! [`Rule`]'s constructors and [`attach`](crate::ValidationUnit::attach)
//! when a rule needs a custom message or code.
//!
//! Builders that can be misconfigured return `Result<Self, ConfigError>`.
//!
//! # Example
//!
//! ```rust
//! use rulegate::{RuleSetExt, ValidationUnit};
//!
//! let unit = ValidationUnit::new("Secret42")
//!     .within_range(8, 32)?
//!     .not_contain("password", true)
//!     .matching(r"\d")?;
//!
//! assert!(unit.evaluate()?.is_pass());
//! # Ok::<(), rulegate::ConfigError>(())
//! ```

use crate::error::ConfigError;
use crate::predicate::{Keyword, Rule, TextCheck};

/// Fluent rule builders for any ordered rule container.
pub trait RuleSetExt: Sized {
    /// Append a finished rule. Every builder method goes through this.
    fn push_rule(&mut self, rule: Rule);

    /// Append a finished rule, chainably.
    fn rule(mut self, rule: Rule) -> Self {
        self.push_rule(rule);
        self
    }

    /// Text contains `keyword`.
    fn contain(self, keyword: impl Into<String>, ignore_case: bool) -> Self {
        self.push_check(TextCheck::Contains(Keyword::new(keyword, ignore_case)))
    }

    /// Text does not contain `keyword`.
    fn not_contain(self, keyword: impl Into<String>, ignore_case: bool) -> Self {
        self.push_check(TextCheck::NotContains(Keyword::new(keyword, ignore_case)))
    }

    /// Text equals `keyword`.
    fn equal_to(self, keyword: impl Into<String>) -> Self {
        self.push_check(TextCheck::EqualTo(keyword.into()))
    }

    /// Text differs from `keyword`.
    fn not_equal_to(self, keyword: impl Into<String>) -> Self {
        self.push_check(TextCheck::NotEqualTo(keyword.into()))
    }

    /// Length between `min` and `max` chars, inclusive.
    fn within_range(self, min: usize, max: usize) -> Result<Self, ConfigError> {
        Ok(self.rule(Rule::length(min, max).build()?))
    }

    /// Length of at least `min` chars.
    fn minimum_length(self, min: usize) -> Self {
        self.push_check(TextCheck::MinLength(min))
    }

    /// Length of at most `max` chars.
    fn maximum_length(self, max: usize) -> Self {
        self.push_check(TextCheck::MaxLength(max))
    }

    /// Only ASCII letters and digits.
    fn alphanumeric_only(self) -> Self {
        self.push_check(TextCheck::AlphanumericOnly)
    }

    /// Only ASCII letters.
    fn alphabet_only(self) -> Self {
        self.push_check(TextCheck::AlphabetOnly)
    }

    /// Only ASCII digits.
    fn digits_only(self) -> Self {
        self.push_check(TextCheck::DigitsOnly)
    }

    /// At least one char that is neither alphanumeric nor whitespace.
    fn contains_symbols(self) -> Self {
        self.push_check(TextCheck::ContainsSymbols)
    }

    /// No lowercase letters.
    fn all_uppercase(self) -> Self {
        self.push_check(TextCheck::AllUppercase)
    }

    /// No uppercase letters.
    fn all_lowercase(self) -> Self {
        self.push_check(TextCheck::AllLowercase)
    }

    /// Text starts with `keyword`.
    fn starts_with(self, keyword: impl Into<String>, ignore_case: bool) -> Self {
        self.push_check(TextCheck::StartsWith(Keyword::new(keyword, ignore_case)))
    }

    /// Text ends with `keyword`.
    fn ends_with(self, keyword: impl Into<String>, ignore_case: bool) -> Self {
        self.push_check(TextCheck::EndsWith(Keyword::new(keyword, ignore_case)))
    }

    /// Text matches the regular expression `pattern`.
    fn matching(self, pattern: &str) -> Result<Self, ConfigError> {
        Ok(self.rule(Rule::matching(pattern).build()?))
    }

    #[doc(hidden)]
    fn push_check(self, check: TextCheck) -> Self {
        self.rule(Rule::from_check(check))
    }
}
