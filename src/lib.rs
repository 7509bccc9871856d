//! # Rulegate
//!
//! Fluent rule composition for validating input values.
//!
//! A [`ValidationUnit`] is bound to one candidate [`Value`] and holds an
//! ordered list of [`Rule`]s plus an ordered list of [`Condition`]s (AND/OR
//! groups of rules). Evaluating it walks the rules, then the conditions, and
//! stops at the first failure, so every evaluation yields one deterministic
//! [`Outcome`] carrying at most one error payload.
//!
//! - Misconfiguration (a rule with both a message and a code, inverted
//!   length bounds, a bad pattern) is a [`ConfigError`] at build time.
//! - A mismatch or a missing value is an `Outcome`, never an error. The only
//!   evaluation error is a display sink that cannot render the outcome.
//! - A null value is reported as [`FailureKind::NullInput`], distinct from a
//!   plain mismatch.
//!
//! ## Quick Example
//!
//! ```rust
//! use rulegate::prelude::*;
//!
//! let mut password = ValidationUnit::new("secret")
//!     .within_range(8, 64)?
//!     .attach(
//!         Condition::all()
//!             .named("strength")
//!             .contains_symbols()
//!             .matching(r"\d")?,
//!     );
//!
//! assert_eq!(
//!     password.evaluate()?.message(),
//!     Some("Length must be between 8 and 64")
//! );
//!
//! password.set_value("s3cret-sauce");
//! assert!(password.evaluate()?.is_pass());
//!
//! password.set_value(None::<&str>);
//! let failure = password.evaluate()?.into_result().unwrap_err();
//! assert_eq!(failure.kind(), FailureKind::NullInput);
//! # Ok::<(), ConfigError>(())
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for rule, condition and unit results.
//! - `serde`: serialize values, payloads and outcomes.
//! - `async`: [`Validator::validate_async`] on the tokio blocking pool.
//! - `proptest`: `Arbitrary` for [`Value`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod builder;
pub mod condition;
pub mod error;
pub mod outcome;
pub mod predicate;
pub mod sink;
pub mod testing;
pub mod unit;
pub mod validator;
pub mod value;

// Re-exports
pub use builder::RuleSetExt;
pub use condition::{Condition, Operator};
pub use error::{ConfigError, ErrorCode, ErrorPayload, FailureKind};
pub use outcome::{Failure, Outcome};
pub use predicate::{Predicate, PredicateExt, Rule, RuleBuilder, RuleKind, Verdict};
pub use sink::{CodeResolver, DisplaySink, ErrorSlot, NoCodes, Report};
pub use unit::{Attachment, ValidationUnit};
#[cfg(feature = "async")]
pub use validator::BatchError;
pub use validator::{BatchOutcome, Mode, UnitFailure, ValidationListener, Validator};
pub use value::Value;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::builder::RuleSetExt;
    pub use crate::condition::{Condition, Operator};
    pub use crate::error::{ConfigError, ErrorCode, ErrorPayload, FailureKind};
    pub use crate::outcome::{Failure, Outcome};
    pub use crate::predicate::{Predicate, PredicateExt, Rule};
    pub use crate::sink::{DisplaySink, ErrorSlot, Report};
    pub use crate::unit::ValidationUnit;
    pub use crate::validator::{BatchOutcome, Validator};
    pub use crate::value::Value;
}
