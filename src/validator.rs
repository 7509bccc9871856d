//! Batch validation
//!
//! A form usually has several inputs. [`Validator`] runs a batch of
//! [`ValidationUnit`]s, lets each one report to its own sink, and combines
//! the results: the bound values when every unit passed, or the failures
//! otherwise.
//!
//! # Example
//!
//! ```rust
//! use rulegate::{BatchOutcome, RuleSetExt, ValidationUnit, Validator};
//!
//! let email = ValidationUnit::new("user@example.com")
//!     .labeled("email")
//!     .contain("@", false);
//! let name = ValidationUnit::new("").labeled("name").minimum_length(1);
//!
//! match Validator::new().validate([&email, &name])? {
//!     BatchOutcome::Valid(_) => unreachable!(),
//!     BatchOutcome::Invalid(failures) => {
//!         assert_eq!(failures.len(), 1);
//!         assert_eq!(failures[0].label(), Some("name"));
//!     }
//! }
//! # Ok::<(), rulegate::ConfigError>(())
//! ```

use std::fmt;

use crate::error::ConfigError;
use crate::outcome::{Failure, Outcome};
use crate::unit::ValidationUnit;
use crate::Value;

/// How a batch treats failing units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Run every unit and collect every failure.
    #[default]
    Continuous,
    /// Stop at the first failing unit; later units are not run.
    Single,
}

/// One failing unit in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitFailure {
    index: usize,
    label: Option<String>,
    failure: Failure,
}

impl UnitFailure {
    /// Position of the unit in the batch.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Label of the unit, if it had one.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Why the unit failed.
    pub fn failure(&self) -> &Failure {
        &self.failure
    }
}

impl fmt::Display for UnitFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{}: {}", label, self.failure),
            None => write!(f, "#{}: {}", self.index, self.failure),
        }
    }
}

/// Result of validating a batch.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum BatchOutcome {
    /// Every unit passed; their values in batch order.
    Valid(Vec<Value>),
    /// The failing units, in batch order.
    Invalid(Vec<UnitFailure>),
}

impl BatchOutcome {
    /// Returns true for [`BatchOutcome::Valid`].
    pub fn is_valid(&self) -> bool {
        matches!(self, BatchOutcome::Valid(_))
    }

    /// Convert into a `Result`.
    pub fn into_result(self) -> Result<Vec<Value>, Vec<UnitFailure>> {
        match self {
            BatchOutcome::Valid(values) => Ok(values),
            BatchOutcome::Invalid(failures) => Err(failures),
        }
    }
}

/// Callbacks for a finished batch.
pub trait ValidationListener {
    /// Every unit passed.
    fn on_success(&mut self, values: Vec<Value>);

    /// At least one unit failed.
    fn on_failure(&mut self, failures: Vec<UnitFailure>);
}

/// Runs batches of validation units.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    mode: Mode,
}

impl Validator {
    /// A validator in [`Mode::Continuous`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the batch mode.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Run every unit (or up to the first failure in [`Mode::Single`]).
    ///
    /// Each unit reports to its own sink. The only error is a sink that
    /// cannot render an outcome.
    pub fn validate<'a>(
        &self,
        units: impl IntoIterator<Item = &'a ValidationUnit>,
    ) -> Result<BatchOutcome, ConfigError> {
        let mut values = Vec::new();
        let mut failures = Vec::new();

        for (index, unit) in units.into_iter().enumerate() {
            match unit.evaluate()? {
                Outcome::Pass => values.push(unit.value().clone()),
                Outcome::Fail(failure) => {
                    failures.push(UnitFailure {
                        index,
                        label: unit.label().map(str::to_string),
                        failure,
                    });
                    if self.mode == Mode::Single {
                        break;
                    }
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            mode = ?self.mode,
            passed = values.len(),
            failed = failures.len(),
            "batch validated"
        );

        if failures.is_empty() {
            Ok(BatchOutcome::Valid(values))
        } else {
            Ok(BatchOutcome::Invalid(failures))
        }
    }

    /// Run a batch and notify `listener` with the result.
    pub fn validate_with_listener<'a, L: ValidationListener + ?Sized>(
        &self,
        units: impl IntoIterator<Item = &'a ValidationUnit>,
        listener: &mut L,
    ) -> Result<(), ConfigError> {
        match self.validate(units)? {
            BatchOutcome::Valid(values) => listener.on_success(values),
            BatchOutcome::Invalid(failures) => listener.on_failure(failures),
        }
        Ok(())
    }

    /// Run a batch on the blocking thread pool and await the result.
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use rulegate::{RuleSetExt, ValidationUnit, Validator};
    ///
    /// # tokio_test::block_on(async {
    /// let units = vec![Arc::new(ValidationUnit::new("12345").digits_only())];
    /// let outcome = Validator::new().validate_async(units).await.unwrap();
    /// assert!(outcome.is_valid());
    /// # });
    /// ```
    #[cfg(feature = "async")]
    pub async fn validate_async(
        &self,
        units: Vec<std::sync::Arc<ValidationUnit>>,
    ) -> Result<BatchOutcome, BatchError> {
        let validator = *self;
        let handle = tokio::task::spawn_blocking(move || {
            validator.validate(units.iter().map(std::sync::Arc::as_ref))
        });
        match handle.await {
            Ok(result) => Ok(result?),
            Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
            Err(_) => Err(BatchError::Cancelled),
        }
    }
}

/// Error from [`Validator::validate_async`].
#[cfg(feature = "async")]
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    /// A sink could not render an outcome.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The runtime shut down before the batch finished.
    #[error("batch validation was cancelled")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RuleSetExt;

    #[derive(Default)]
    struct Recorder {
        success: Option<Vec<Value>>,
        failure: Option<Vec<UnitFailure>>,
    }

    impl ValidationListener for Recorder {
        fn on_success(&mut self, values: Vec<Value>) {
            self.success = Some(values);
        }

        fn on_failure(&mut self, failures: Vec<UnitFailure>) {
            self.failure = Some(failures);
        }
    }

    fn units() -> Vec<ValidationUnit> {
        vec![
            ValidationUnit::new("a").labeled("first").minimum_length(2),
            ValidationUnit::new("ok").labeled("second").minimum_length(2),
            ValidationUnit::new(7).digits_only().maximum_length(0),
        ]
    }

    #[test]
    fn all_valid_returns_values_in_order() {
        let a = ValidationUnit::new("abc").alphabet_only();
        let b = ValidationUnit::new(42).digits_only();
        let outcome = Validator::new().validate([&a, &b]).unwrap();
        assert_eq!(
            outcome,
            BatchOutcome::Valid(vec![Value::from("abc"), Value::from(42)])
        );
    }

    #[test]
    fn continuous_collects_every_failure() {
        let units = units();
        let failures = Validator::new()
            .validate(&units)
            .unwrap()
            .into_result()
            .unwrap_err();
        let indexes: Vec<_> = failures.iter().map(UnitFailure::index).collect();
        assert_eq!(indexes, [0, 2]);
        assert_eq!(failures[0].to_string(), "first: Length must be at least 2");
        assert_eq!(failures[1].to_string(), "#2: Length must be at most 0");
    }

    #[test]
    fn single_stops_at_first_failure() {
        let units = units();
        let failures = Validator::new()
            .mode(Mode::Single)
            .validate(&units)
            .unwrap()
            .into_result()
            .unwrap_err();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].label(), Some("first"));
    }

    #[test]
    fn listener_hears_the_verdict() {
        let mut recorder = Recorder::default();
        Validator::new()
            .validate_with_listener(&units(), &mut recorder)
            .unwrap();
        assert!(recorder.success.is_none());
        assert_eq!(recorder.failure.map(|f| f.len()), Some(2));

        let mut recorder = Recorder::default();
        let ok = ValidationUnit::new("x");
        Validator::new()
            .validate_with_listener([&ok], &mut recorder)
            .unwrap();
        assert_eq!(recorder.success, Some(vec![Value::from("x")]));
    }

    #[test]
    fn empty_batch_is_valid() {
        let none: [&ValidationUnit; 0] = [];
        assert!(Validator::new().validate(none).unwrap().is_valid());
    }
}
