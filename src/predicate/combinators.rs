//! Core predicate trait and logical combinators
//!
//! This module provides the `Predicate` trait every check implements, plus
//! `and`/`or`/`not` combinators for composing caller-supplied predicates
//! before they are wrapped in a [`Rule`](super::Rule).

use crate::Value;

/// A check over a candidate [`Value`].
///
/// `check` is only called with a null value when `accepts_null` returns
/// true; otherwise the owning rule reports a `NullInput` failure without
/// consulting the predicate.
///
/// # Example
///
/// ```rust
/// use rulegate::{predicate::*, Value};
///
/// let even = |v: &Value| matches!(v, Value::Int(i) if i % 2 == 0);
/// assert!(even.check(&Value::from(4)));
/// assert!(!even.check(&Value::from(3)));
/// ```
pub trait Predicate: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &Value) -> bool;

    /// Whether a null value should reach `check` instead of failing early.
    fn accepts_null(&self) -> bool {
        false
    }
}

// Blanket impl for closures
impl<F> Predicate for F
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &Value) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
///
/// # Example
///
/// ```rust
/// use rulegate::{predicate::*, Value};
///
/// let short = |v: &Value| v.char_len().is_some_and(|n| n < 4);
/// let numeric = |v: &Value| matches!(v, Value::Int(_));
/// let p = short.and(numeric.not());
/// assert!(p.check(&Value::from("abc")));
/// assert!(!p.check(&Value::from(12)));
/// ```
pub trait PredicateExt: Predicate + Sized {
    /// Both predicates must be true.
    fn and<P: Predicate>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Either predicate must be true.
    fn or<P: Predicate>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    fn not(self) -> Not<Self> {
        Not(self)
    }

    /// Let null values reach this predicate instead of failing as `NullInput`.
    ///
    /// ```rust
    /// use rulegate::{predicate::*, Value};
    ///
    /// let optional = (|v: &Value| v.is_null()).nullable();
    /// assert!(optional.accepts_null());
    /// ```
    fn nullable(self) -> Nullable<Self> {
        Nullable(self)
    }
}

impl<P: Predicate> PredicateExt for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<P1: Predicate, P2: Predicate> Predicate for And<P1, P2> {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        self.0.check(value) && self.1.check(value)
    }

    fn accepts_null(&self) -> bool {
        self.0.accepts_null() && self.1.accepts_null()
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<P1: Predicate, P2: Predicate> Predicate for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        self.0.check(value) || self.1.check(value)
    }

    fn accepts_null(&self) -> bool {
        self.0.accepts_null() && self.1.accepts_null()
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<P: Predicate> Predicate for Not<P> {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        !self.0.check(value)
    }

    fn accepts_null(&self) -> bool {
        self.0.accepts_null()
    }
}

/// Wrapper that lets null values through to the inner predicate.
#[derive(Clone, Copy, Debug)]
pub struct Nullable<P>(pub P);

impl<P: Predicate> Predicate for Nullable<P> {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        self.0.check(value)
    }

    fn accepts_null(&self) -> bool {
        true
    }
}
