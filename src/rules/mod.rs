//! Rule definition and the accumulating aggregator.
//!
//! A [`Rule`] pairs a predicate over a value with a message producer;
//! [`all`] runs a whole slice of rules against one value and folds the
//! results with [`Outcome::concat`](crate::Outcome::concat), so the caller
//! receives either the original value or every violation at once.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::rules::{all, Rule};
//!
//! let checks = [
//!     Rule::with_message(|n: &i32| *n > 0, "must be positive"),
//!     Rule::with_message(|n: &i32| *n % 2 == 0, "must be even"),
//! ];
//!
//! assert!(all(4, &checks).is_success());
//! assert_eq!(all(-3, &checks).iter_messages().count(), 2);
//! ```
pub mod aggregate;
pub mod rule;

pub use self::aggregate::*;
pub use self::rule::*;
