//! Signature adapters that mask the checked-failure channel of callables.
//!
//! Rule closures, combinator arguments, and pipeline stages all expect
//! infallible signatures, while much real code returns `Result`. Each
//! adapter here takes a fallible callable and returns a callable of the
//! same shape with the error channel erased, following one shared rule:
//! a panic already in flight propagates as-is, and an `Err` is converted
//! into a panic carrying the error's `Display` rendering.
//!
//! Use with caution: an adapted callable trades a recoverable error for a
//! panic, which is only appropriate where an error is genuinely a bug or
//! the caller has an unwind boundary.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::adapt;
//! use outcome_rail::rules::Rule;
//!
//! fn looks_numeric(input: &String) -> Result<bool, core::num::ParseIntError> {
//!     Ok(input.parse::<i64>()? >= 0)
//! }
//!
//! let numeric = Rule::with_message(adapt::predicate(looks_numeric), "must be a count");
//! assert!(numeric.validate("42".to_string()).is_success());
//! ```
use core::fmt::Display;

/// Masks the error channel of a fallible zero-argument procedure.
///
/// # Examples
///
/// ```
/// use outcome_rail::adapt;
///
/// let flush = adapt::task(|| Ok::<_, &str>(()));
/// flush();
/// ```
pub fn task<F, E>(fallible: F) -> impl Fn()
where
    F: Fn() -> Result<(), E>,
    E: Display,
{
    move || {
        if let Err(error) = fallible() {
            panic!("{error}");
        }
    }
}

/// Masks the error channel of a fallible one-argument procedure.
///
/// # Examples
///
/// ```
/// use outcome_rail::adapt;
///
/// let record = adapt::action(|n: i32| {
///     if n >= 0 {
///         Ok(())
///     } else {
///         Err("negative")
///     }
/// });
/// record(7);
/// ```
pub fn action<T, F, E>(fallible: F) -> impl Fn(T)
where
    F: Fn(T) -> Result<(), E>,
    E: Display,
{
    move |input| {
        if let Err(error) = fallible(input) {
            panic!("{error}");
        }
    }
}

/// Masks the error channel of a fallible predicate.
///
/// The adapted predicate composes directly with
/// [`Rule::new`](crate::rules::Rule::new) and
/// [`Rule::with_message`](crate::rules::Rule::with_message).
///
/// # Examples
///
/// ```
/// use outcome_rail::adapt;
///
/// let even = adapt::predicate(|n: &i32| Ok::<_, &str>(*n % 2 == 0));
/// assert!(even(&4));
/// assert!(!even(&3));
/// ```
pub fn predicate<T, F, E>(fallible: F) -> impl Fn(&T) -> bool
where
    F: Fn(&T) -> Result<bool, E>,
    E: Display,
{
    move |input| match fallible(input) {
        Ok(verdict) => verdict,
        Err(error) => panic!("{error}"),
    }
}

/// Masks the error channel of a fallible transform.
///
/// # Examples
///
/// ```
/// use outcome_rail::adapt;
///
/// let parse = adapt::transform(|s: &str| s.parse::<i32>());
/// assert_eq!(parse("42"), 42);
/// ```
pub fn transform<I, O, F, E>(fallible: F) -> impl Fn(I) -> O
where
    F: Fn(I) -> Result<O, E>,
    E: Display,
{
    move |input| match fallible(input) {
        Ok(output) => output,
        Err(error) => panic!("{error}"),
    }
}

/// Masks the error channel of a fallible zero-argument factory.
///
/// # Examples
///
/// ```
/// use outcome_rail::adapt;
///
/// let default_port = adapt::factory(|| Ok::<_, &str>(8080));
/// assert_eq!(default_port(), 8080);
/// ```
pub fn factory<T, F, E>(fallible: F) -> impl Fn() -> T
where
    F: Fn() -> Result<T, E>,
    E: Display,
{
    move || match fallible() {
        Ok(value) => value,
        Err(error) => panic!("{error}"),
    }
}
