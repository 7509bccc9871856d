//! Display sinks
//!
//! A sink is whatever shows the result of a validation to a user: an error
//! label under a text field, a log line, a JSON response. The engine hands
//! each sink one [`Report`] per evaluation and never holds a reference to the
//! rendering surface itself.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use std::sync::Arc;
//! use rulegate::{ErrorCode, ErrorSlot, Rule, ValidationUnit};
//!
//! let codes = HashMap::from([(ErrorCode::new("too_short"), "Too short".to_string())]);
//! let slot = Arc::new(ErrorSlot::with_resolver(codes));
//!
//! let mut unit = ValidationUnit::new("ab")
//!     .with_sink(slot.clone())
//!     .attach(Rule::min_length(3).code("too_short").build()?);
//!
//! unit.evaluate()?;
//! assert_eq!(slot.current().as_deref(), Some("Too short"));
//!
//! unit.set_value("abc");
//! unit.evaluate()?;
//! assert_eq!(slot.current(), None);
//! # Ok::<(), rulegate::ConfigError>(())
//! ```

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::error::{ConfigError, ErrorCode, FailureKind};
use crate::outcome::{Failure, Outcome};

/// What a sink receives for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report<'a> {
    /// Whether validation passed.
    pub passed: bool,
    /// Failing message, if the failure carried one.
    pub message: Option<&'a str>,
    /// Failing code, if the failure carried one.
    pub code: Option<&'a ErrorCode>,
    /// Whether the failure was a missing value rather than a mismatch.
    pub null_input: bool,
}

impl<'a> Report<'a> {
    /// Borrow a report from an outcome.
    pub fn from_outcome(outcome: &'a Outcome) -> Self {
        Report {
            passed: outcome.is_pass(),
            message: outcome.message(),
            code: outcome.code(),
            null_input: outcome.failure().is_some_and(Failure::is_null_input),
        }
    }

    /// The text to show, or `None` when there is nothing to show.
    ///
    /// A failure must carry a message or a code that `resolver` knows;
    /// anything else is a configuration error. A missing value renders the
    /// same text followed by `(value is required)`.
    ///
    /// ```rust
    /// use rulegate::{ConfigError, NoCodes, Report};
    ///
    /// let ok = Report { passed: true, message: None, code: None, null_input: false };
    /// assert_eq!(ok.render(&NoCodes).unwrap(), None);
    ///
    /// let bare = Report { passed: false, message: None, code: None, null_input: false };
    /// assert!(matches!(bare.render(&NoCodes), Err(ConfigError::UnrenderableFailure)));
    ///
    /// let missing = Report { passed: false, message: Some("Required"), code: None, null_input: true };
    /// assert_eq!(missing.render(&NoCodes).unwrap().as_deref(), Some("Required (value is required)"));
    /// ```
    pub fn render<R: CodeResolver + ?Sized>(
        &self,
        resolver: &R,
    ) -> Result<Option<String>, ConfigError> {
        if self.passed {
            return Ok(None);
        }
        let text = match (self.message, self.code) {
            (Some(message), _) => message.to_string(),
            (None, Some(code)) => resolver
                .resolve(code)
                .ok_or_else(|| ConfigError::UnknownErrorCode(code.clone()))?,
            (None, None) => return Err(ConfigError::UnrenderableFailure),
        };
        if self.null_input {
            Ok(Some(format!("{text} ({})", FailureKind::NullInput)))
        } else {
            Ok(Some(text))
        }
    }
}

/// Receives exactly one report per unit evaluation.
pub trait DisplaySink: Send + Sync {
    /// Present the report. Fails only on a configuration problem.
    fn report(&self, report: &Report<'_>) -> Result<(), ConfigError>;
}

// Blanket impl for closures
impl<F> DisplaySink for F
where
    F: Fn(&Report<'_>) -> Result<(), ConfigError> + Send + Sync,
{
    fn report(&self, report: &Report<'_>) -> Result<(), ConfigError> {
        self(report)
    }
}

/// Looks up the display text for an error code.
pub trait CodeResolver: Send + Sync {
    /// Text for `code`, if known.
    fn resolve(&self, code: &ErrorCode) -> Option<String>;
}

impl CodeResolver for HashMap<ErrorCode, String> {
    fn resolve(&self, code: &ErrorCode) -> Option<String> {
        self.get(code).cloned()
    }
}

/// A resolver that knows no codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCodes;

impl CodeResolver for NoCodes {
    fn resolve(&self, _code: &ErrorCode) -> Option<String> {
        None
    }
}

/// A sink holding the error text currently shown for one input.
///
/// A passing report clears the text; a failing one replaces it.
#[derive(Debug, Default)]
pub struct ErrorSlot<R = NoCodes> {
    resolver: R,
    current: Mutex<Option<String>>,
}

impl ErrorSlot<NoCodes> {
    /// A slot that can only render literal messages.
    pub fn new() -> Self {
        Self::with_resolver(NoCodes)
    }
}

impl<R: CodeResolver> ErrorSlot<R> {
    /// A slot that resolves codes through `resolver`.
    pub fn with_resolver(resolver: R) -> Self {
        ErrorSlot {
            resolver,
            current: Mutex::new(None),
        }
    }

    /// The error text currently shown, if any.
    pub fn current(&self) -> Option<String> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl<R: CodeResolver> DisplaySink for ErrorSlot<R> {
    fn report(&self, report: &Report<'_>) -> Result<(), ConfigError> {
        let text = report.render(&self.resolver)?;
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = text;
        Ok(())
    }
}
