//! Error payloads and configuration errors
//!
//! Two very different things live here. An [`ErrorPayload`] is data: the
//! message or code a failing rule carries to whoever renders it. A
//! [`ConfigError`] is a real error: a rule set that was put together wrong and
//! must be fixed by the developer, surfaced while the rules are being built.

use std::borrow::Cow;
use std::fmt;

/// An opaque symbolic error code, resolved to text by a display sink.
///
/// # Examples
///
/// ```
/// use rulegate::ErrorCode;
///
/// let code = ErrorCode::new("password.too_short");
/// assert_eq!(code.as_str(), "password.too_short");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ErrorCode(Cow<'static, str>);

impl ErrorCode {
    /// Create a code from a static or owned string.
    pub fn new(code: impl Into<Cow<'static, str>>) -> Self {
        ErrorCode(code.into())
    }

    /// The symbol as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for ErrorCode {
    fn from(code: &'static str) -> Self {
        ErrorCode::new(code)
    }
}

/// What a failing rule reports: a literal message or a code, never both.
///
/// With the `serde` feature this serializes as `{"message": "..."}` or
/// `{"code": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorPayload {
    /// A ready-to-display message.
    Message(String),
    /// A symbolic code for the sink to look up.
    Code(ErrorCode),
}

impl ErrorPayload {
    /// The literal message, if this payload is one.
    pub fn message(&self) -> Option<&str> {
        match self {
            ErrorPayload::Message(m) => Some(m),
            ErrorPayload::Code(_) => None,
        }
    }

    /// The code, if this payload is one.
    pub fn code(&self) -> Option<&ErrorCode> {
        match self {
            ErrorPayload::Message(_) => None,
            ErrorPayload::Code(c) => Some(c),
        }
    }
}

impl fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorPayload::Message(m) => f.write_str(m),
            ErrorPayload::Code(c) => write!(f, "[{}]", c),
        }
    }
}

/// Why a rule failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FailureKind {
    /// The value was null and the rule requires one.
    NullInput,
    /// The value was present but did not satisfy the rule.
    Mismatch,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::NullInput => f.write_str("value is required"),
            FailureKind::Mismatch => f.write_str("value does not match"),
        }
    }
}

/// A rule set that cannot be used as configured.
///
/// Raised while building rules, conditions and sinks. Evaluating a value
/// never produces one.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A rule ended up with neither a message nor a code.
    #[error("rule `{rule}` has neither an error message nor an error code")]
    MissingErrorPayload {
        /// Name of the offending rule.
        rule: String,
    },

    /// A rule was given both a message and a code.
    #[error("rule `{rule}` has both an error message and an error code; use one")]
    ConflictingErrorPayload {
        /// Name of the offending rule.
        rule: String,
    },

    /// A length range whose minimum exceeds its maximum.
    #[error("minimum length {min} is greater than maximum length {max}")]
    InvertedBounds {
        /// Configured minimum.
        min: usize,
        /// Configured maximum.
        max: usize,
    },

    /// A regular expression that does not compile.
    #[error("invalid pattern `{pattern}`")]
    InvalidPattern {
        /// The rejected pattern.
        pattern: String,
        /// Compiler diagnostics.
        #[source]
        source: regex::Error,
    },

    /// An operator name that is neither AND nor OR.
    #[error("unknown condition operator `{0}`")]
    UnknownOperator(String),

    /// A failure reached a sink without anything it could render.
    #[error("validation failed without an error message or code to display")]
    UnrenderableFailure,

    /// A sink could not resolve an error code to text.
    #[error("no text registered for error code `{0}`")]
    UnknownErrorCode(ErrorCode),
}
