//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Accumulating Rule Failures
//!
//! ```
//! use outcome_rail::rules::{all, Rule};
//!
//! let checks = [
//!     Rule::with_message(|n: &i32| *n > 0, "must be positive"),
//!     Rule::with_message(|n: &i32| *n % 2 == 0, "must be even"),
//!     Rule::with_message(|n: &i32| *n < 100, "must be under 100"),
//! ];
//!
//! let outcome = all(-3, &checks);
//! let messages: Vec<_> = outcome.iter_messages().cloned().collect();
//! assert_eq!(messages, vec!["must be positive", "must be even"]);
//! ```
//!
//! ## Branching on an Outcome
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let parsed = Outcome::success(21)
//!     .map(|n| n * 2)
//!     .and_then(|n| {
//!         if n < 100 {
//!             Outcome::success(n)
//!         } else {
//!             Outcome::failure("out of range")
//!         }
//!     });
//!
//! assert_eq!(parsed.unwrap_or(0), 42);
//! ```
//!
//! ## Collecting Many Outcomes
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let one: Outcome<i32> = Outcome::success(10);
//! let two: Outcome<i32> = Outcome::failure("error");
//! let combined: Outcome<Vec<i32>> = vec![one, two].into_iter().collect();
//!
//! assert!(combined.is_failure());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Signature adapters that mask the checked-failure channel of callables
pub mod adapt;
/// Conversions between `Result` and `Outcome`
pub mod convert;
/// Macros for building rule sets and formatted failures
pub mod macros;
/// The two-variant `Outcome` type and its combinators
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Rule definition and the accumulating aggregator
pub mod rules;
/// Message storage shared across the crate
pub mod types;

// Re-export the everyday surface at the root, but encourage using
// prelude/focused modules for anything beyond the core type.
pub use convert::*;
pub use outcome::*;
pub use rules::{all, Rule, ValidateExt};
pub use types::{EmptyMessages, Message, MessageVec, Messages};
