//! Testing utilities
//!
//! Assertion macros for outcomes, and (with the `proptest` feature) an
//! `Arbitrary` implementation for [`Value`](crate::Value).
//!
//! # Example
//!
//! ```rust
//! use rulegate::{assert_fails, assert_fails_with, assert_passes};
//! use rulegate::{ErrorPayload, RuleSetExt, ValidationUnit};
//!
//! let unit = ValidationUnit::new("hello").minimum_length(3);
//! assert_passes!(unit.check());
//!
//! let unit = ValidationUnit::new("hi").minimum_length(3);
//! assert_fails!(unit.check());
//! assert_fails_with!(
//!     unit.check(),
//!     ErrorPayload::Message("Length must be at least 3".into())
//! );
//! ```

/// Assert that an outcome passes.
///
/// This macro will panic if the outcome is a `Fail`.
///
/// # Example
///
/// ```rust
/// use rulegate::{Outcome, assert_passes};
///
/// assert_passes!(Outcome::Pass);
/// ```
#[macro_export]
macro_rules! assert_passes {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Pass => {}
            $crate::Outcome::Fail(failure) => {
                panic!("Expected Pass, got Fail: {:?}", failure);
            }
        }
    };
}

/// Assert that an outcome fails.
///
/// This macro will panic if the outcome is a `Pass`.
#[macro_export]
macro_rules! assert_fails {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Fail(_) => {}
            $crate::Outcome::Pass => {
                panic!("Expected Fail, got Pass");
            }
        }
    };
}

/// Assert that an outcome fails with a specific error payload.
///
/// This macro will panic if the outcome is a `Pass` or if the payload
/// doesn't match.
#[macro_export]
macro_rules! assert_fails_with {
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            $crate::Outcome::Fail(failure) => {
                assert_eq!(failure.error(), &$expected);
            }
            $crate::Outcome::Pass => {
                panic!("Expected Fail with {:?}, got Pass", $expected);
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{ErrorPayload, Outcome, RuleSetExt, ValidationUnit};

    fn failing() -> Outcome {
        ValidationUnit::new("").minimum_length(1).check()
    }

    #[test]
    fn assert_passes_macro() {
        assert_passes!(Outcome::Pass);
    }

    #[test]
    fn assert_fails_macro() {
        assert_fails!(failing());
    }

    #[test]
    fn assert_fails_with_macro() {
        assert_fails_with!(
            failing(),
            ErrorPayload::Message("Length must be at least 1".into())
        );
    }

    #[test]
    #[should_panic(expected = "Expected Pass, got Fail")]
    fn assert_passes_panics_on_fail() {
        assert_passes!(failing());
    }

    #[test]
    #[should_panic(expected = "Expected Fail, got Pass")]
    fn assert_fails_panics_on_pass() {
        assert_fails!(Outcome::Pass);
    }

    #[test]
    #[should_panic(expected = "Expected Fail with")]
    fn assert_fails_with_panics_on_pass() {
        assert_fails_with!(Outcome::Pass, ErrorPayload::Message("x".into()));
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::Value;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn value_arbitrary_has_text_unless_null(v in any::<Value>()) {
                prop_assert_eq!(v.text().is_none(), v.is_null());
            }
        }
    }
}
