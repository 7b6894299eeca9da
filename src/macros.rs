//! Ergonomic macros for building rule sets and formatted failures.
//!
//! - [`macro@crate::rules`] - Builds a fixed-size array of constant-message
//!   [`Rule`](crate::rules::Rule)s ready to hand to
//!   [`all`](crate::rules::all).
//! - [`macro@crate::failure`] - Formats a one-message
//!   [`Failure`](crate::Outcome::Failure), forwarding its arguments to
//!   `format!`.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{failure, rules, Outcome};
//! use outcome_rail::rules::all;
//!
//! let checks = rules![
//!     |n: &i32| *n > 0 => "must be positive",
//!     |n: &i32| *n % 2 == 0 => "must be even",
//! ];
//! assert!(all(4, &checks).is_success());
//!
//! let rejected: Outcome<i32> = failure!("{} is not a valid count", -3);
//! assert!(rejected.is_failure());
//! ```

/// Builds a fixed-size array of constant-message rules.
///
/// Each entry pairs a predicate with the message reported when it fails,
/// written `condition => message`. Entries keep their order, which is the
/// order the aggregator evaluates and reports them in.
///
/// # Examples
///
/// ```
/// use outcome_rail::rules;
/// use outcome_rail::rules::all;
///
/// let checks = rules![
///     |s: &String| !s.is_empty() => "must not be empty",
///     |s: &String| s.len() <= 16 => "must be at most 16 bytes",
/// ];
///
/// assert!(all("ada".to_string(), &checks).is_success());
/// assert!(all(String::new(), &checks).is_failure());
/// ```
#[macro_export]
macro_rules! rules {
    ($($condition:expr => $message:expr),+ $(,)?) => {
        [$($crate::rules::Rule::with_message($condition, $message)),+]
    };
}

/// Creates a one-message failed [`Outcome`](crate::Outcome), formatting the
/// message like `format!`.
///
/// # Examples
///
/// ```
/// use outcome_rail::{failure, Outcome};
///
/// let outcome: Outcome<i32> = failure!("expected at most {}, got {}", 100, 150);
/// assert_eq!(
///     outcome.into_messages().unwrap().first(),
///     "expected at most 100, got 150",
/// );
/// ```
#[macro_export]
macro_rules! failure {
    ($($arg:tt)*) => {
        $crate::Outcome::Failure($crate::Messages::single(format!($($arg)*)))
    };
}
