//! Candidate values
//!
//! Rules validate loosely-typed input: whatever the caller binds to a
//! [`ValidationUnit`](crate::ValidationUnit) is converted into a [`Value`].
//! Predicates read a value through its text form, so a number or a boolean
//! can be checked by the same length or affix rules as a string.
//!
//! # Examples
//!
//! ```
//! use rulegate::Value;
//!
//! assert_eq!(Value::from("7 chars").text().as_deref(), Some("7 chars"));
//! assert_eq!(Value::from(1234).text().as_deref(), Some("1234"));
//! assert_eq!(Value::from(false).text().as_deref(), Some("false"));
//! assert_eq!(Value::from(None::<&str>).text(), None);
//! ```

use std::borrow::Cow;
use std::fmt;

/// A candidate value bound to a validation unit.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// No value at all. Most predicates report this as a `NullInput` failure.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A piece of text.
    Text(String),
}

impl Value {
    /// Returns true for [`Value::Null`].
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The text predicates read, or `None` for a null value.
    ///
    /// Text is borrowed; numbers and booleans are formatted.
    pub fn text(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Null => None,
            Value::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            Value::Int(i) => Some(Cow::Owned(i.to_string())),
            Value::Float(f) => Some(Cow::Owned(f.to_string())),
            Value::Text(s) => Some(Cow::Borrowed(s.as_str())),
        }
    }

    /// Length of the text form in chars, or `None` for a null value.
    ///
    /// ```
    /// use rulegate::Value;
    ///
    /// assert_eq!(Value::from("héllo").char_len(), Some(5));
    /// assert_eq!(Value::from(true).char_len(), Some(4));
    /// assert_eq!(Value::Null.char_len(), None);
    /// ```
    pub fn char_len(&self) -> Option<usize> {
        self.text().map(|t| t.chars().count())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.text() {
            Some(text) => f.write_str(&text),
            None => f.write_str("null"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

macro_rules! impl_from_int {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Int(i64::from(value))
                }
            }
        )+
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::Int),
            any::<String>().prop_map(Value::Text),
        ]
        .boxed()
    }
}
