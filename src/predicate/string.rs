//! Text predicates
//!
//! The closed set of built-in checks. Each one reads the value through
//! [`Value::text`], so numbers and booleans are checked by their formatted
//! text just like strings.

use regex::Regex;

use super::combinators::Predicate;
use crate::Value;

/// Keyword matching configuration shared by the contains and affix checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keyword {
    /// Text to look for.
    pub keyword: String,
    /// Compare without regard to letter case.
    pub ignore_case: bool,
}

impl Keyword {
    /// Create a keyword matcher.
    pub fn new(keyword: impl Into<String>, ignore_case: bool) -> Self {
        Keyword {
            keyword: keyword.into(),
            ignore_case,
        }
    }

    fn apply(&self, text: &str, op: impl Fn(&str, &str) -> bool) -> bool {
        if self.ignore_case {
            op(
                text.to_lowercase().as_str(),
                self.keyword.to_lowercase().as_str(),
            )
        } else {
            op(text, self.keyword.as_str())
        }
    }
}

/// A built-in check over the text form of a value.
#[derive(Clone, Debug)]
pub enum TextCheck {
    /// Length in chars within `min..=max`.
    Length {
        /// Inclusive lower bound.
        min: usize,
        /// Inclusive upper bound.
        max: usize,
    },
    /// Length in chars at least this.
    MinLength(usize),
    /// Length in chars at most this.
    MaxLength(usize),
    /// Text contains the keyword.
    Contains(Keyword),
    /// Text does not contain the keyword.
    NotContains(Keyword),
    /// Text equals the keyword exactly.
    EqualTo(String),
    /// Text differs from the keyword.
    NotEqualTo(String),
    /// Text starts with the keyword.
    StartsWith(Keyword),
    /// Text ends with the keyword.
    EndsWith(Keyword),
    /// Text equals its own uppercase form.
    AllUppercase,
    /// Text equals its own lowercase form.
    AllLowercase,
    /// Every char is an ASCII letter or digit.
    AlphanumericOnly,
    /// Every char is an ASCII letter.
    AlphabetOnly,
    /// Every char is an ASCII digit.
    DigitsOnly,
    /// At least one char is neither ASCII alphanumeric nor whitespace.
    ContainsSymbols,
    /// Text matches the regular expression.
    Matches(Regex),
}

impl TextCheck {
    /// Short diagnostic name, used as the default rule name.
    pub fn name(&self) -> &'static str {
        match self {
            TextCheck::Length { .. } => "length",
            TextCheck::MinLength(_) => "min_length",
            TextCheck::MaxLength(_) => "max_length",
            TextCheck::Contains(_) => "contains",
            TextCheck::NotContains(_) => "not_contains",
            TextCheck::EqualTo(_) => "equal_to",
            TextCheck::NotEqualTo(_) => "not_equal_to",
            TextCheck::StartsWith(_) => "starts_with",
            TextCheck::EndsWith(_) => "ends_with",
            TextCheck::AllUppercase => "all_uppercase",
            TextCheck::AllLowercase => "all_lowercase",
            TextCheck::AlphanumericOnly => "alphanumeric_only",
            TextCheck::AlphabetOnly => "alphabet_only",
            TextCheck::DigitsOnly => "digits_only",
            TextCheck::ContainsSymbols => "contains_symbols",
            TextCheck::Matches(_) => "matches",
        }
    }

    /// Message reported when no custom message or code is configured.
    pub fn default_message(&self) -> String {
        match self {
            TextCheck::Length { min, max } => {
                format!("Length must be between {} and {}", min, max)
            }
            TextCheck::MinLength(min) => format!("Length must be at least {}", min),
            TextCheck::MaxLength(max) => format!("Length must be at most {}", max),
            TextCheck::Contains(k) => format!("Value does not contain {}", k.keyword),
            TextCheck::NotContains(k) => format!("Value contains {}", k.keyword),
            TextCheck::EqualTo(k) => format!("Value is not equal to {}", k),
            TextCheck::NotEqualTo(k) => format!("Value is equal to {}", k),
            TextCheck::StartsWith(k) => format!("Value does not start with {}", k.keyword),
            TextCheck::EndsWith(k) => format!("Value does not end with {}", k.keyword),
            TextCheck::AllUppercase => "Value is not all uppercase".to_string(),
            TextCheck::AllLowercase => "Value is not all lowercase".to_string(),
            TextCheck::AlphanumericOnly => "Value is not alphanumeric".to_string(),
            TextCheck::AlphabetOnly => "Value is not alphabetic".to_string(),
            TextCheck::DigitsOnly => "Value is not digits only".to_string(),
            TextCheck::ContainsSymbols => "Value does not contain symbols".to_string(),
            TextCheck::Matches(re) => format!("Value does not match {}", re.as_str()),
        }
    }

    fn check_text(&self, text: &str) -> bool {
        match self {
            TextCheck::Length { min, max } => {
                let len = text.chars().count();
                len >= *min && len <= *max
            }
            TextCheck::MinLength(min) => text.chars().count() >= *min,
            TextCheck::MaxLength(max) => text.chars().count() <= *max,
            TextCheck::Contains(k) => k.apply(text, |t, k| t.contains(k)),
            TextCheck::NotContains(k) => !k.apply(text, |t, k| t.contains(k)),
            TextCheck::EqualTo(k) => text == k,
            TextCheck::NotEqualTo(k) => text != k,
            TextCheck::StartsWith(k) => k.apply(text, |t, k| t.starts_with(k)),
            TextCheck::EndsWith(k) => k.apply(text, |t, k| t.ends_with(k)),
            TextCheck::AllUppercase => text.to_uppercase() == text,
            TextCheck::AllLowercase => text.to_lowercase() == text,
            TextCheck::AlphanumericOnly => text.chars().all(|c| c.is_ascii_alphanumeric()),
            TextCheck::AlphabetOnly => text.chars().all(|c| c.is_ascii_alphabetic()),
            TextCheck::DigitsOnly => text.chars().all(|c| c.is_ascii_digit()),
            TextCheck::ContainsSymbols => text
                .chars()
                .any(|c| !(c.is_ascii_alphanumeric() || c.is_whitespace())),
            TextCheck::Matches(re) => re.is_match(text),
        }
    }
}

impl Predicate for TextCheck {
    fn check(&self, value: &Value) -> bool {
        match value.text() {
            Some(text) => self.check_text(&text),
            None => false,
        }
    }
}
