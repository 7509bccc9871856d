//! Predicates and rules
//!
//! The atomic unit of validation. A [`Predicate`] answers one yes/no question
//! about a [`Value`](crate::Value); a [`Rule`] gives that question a name and
//! the error payload to report when the answer is no.
//!
//! Built-in checks form a closed set ([`TextCheck`]) carrying their
//! configuration as plain data. Anything else goes through
//! [`Rule::custom`], which accepts any predicate, closures included.
//!
//! # Example
//!
//! ```rust
//! use rulegate::{predicate::*, Value};
//!
//! let username = Rule::all_of([
//!     Rule::length(3, 20).build().unwrap(),
//!     Rule::alphanumeric_only().build().unwrap(),
//! ])
//! .message("Pick 3-20 letters or digits")
//! .build()
//! .unwrap();
//!
//! assert!(username.evaluate(&Value::from("john42")).is_pass());
//! assert!(!username.evaluate(&Value::from("jo")).is_pass());
//! ```

mod combinators;
mod rule;
mod string;

pub use combinators::{And, Not, Nullable, Or, Predicate, PredicateExt};
pub use rule::{Rule, RuleBuilder, RuleKind, Verdict};
pub use string::{Keyword, TextCheck};
