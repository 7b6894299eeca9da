//! Conversion helpers between `Result` and `Outcome`.
//!
//! These adapters make it straightforward to adopt accumulating validation
//! incrementally: wrap the results of legacy checks on the way in, and
//! flatten outcomes back into plain results at the boundary with external
//! APIs.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//!
//! let outcome = result_to_outcome(Ok::<_, &str>(42));
//! assert!(outcome.is_success());
//!
//! let validation = collect_failures(["missing name", "missing email"]);
//! assert!(validation.is_failure());
//! ```
use crate::outcome::Outcome;
use crate::types::{Message, MessageVec, Messages};
use core::iter::FusedIterator;

/// Converts an `Outcome` to a `Result`, taking the first message if failed.
///
/// Accumulation is lost; use [`Outcome::to_result`] to keep every message.
///
/// # Arguments
///
/// * `outcome` - The outcome to convert
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::Outcome;
///
/// assert_eq!(outcome_to_result(Outcome::success(42)), Ok(42));
///
/// let failed = Outcome::<i32>::failure_all(["first", "second"]);
/// assert_eq!(outcome_to_result(failed), Err("first".to_string()));
/// ```
#[inline]
pub fn outcome_to_result<V>(outcome: Outcome<V>) -> Result<V, Message> {
    match outcome {
        Outcome::Success(value) => Ok(value),
        Outcome::Failure(messages) => Err(messages.into_first()),
    }
}

/// Converts a `Result` to an `Outcome`, one message per error.
///
/// # Arguments
///
/// * `result` - The result to convert
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
///
/// let outcome = result_to_outcome(Err::<i32, _>("failed"));
/// assert!(outcome.is_failure());
/// ```
#[inline]
pub fn result_to_outcome<V, E>(result: Result<V, E>) -> Outcome<V>
where
    E: Into<Message>,
{
    Outcome::from_result(result)
}

/// Collects loose failure messages into a single `Outcome`.
///
/// # Arguments
///
/// * `messages` - An iterator of messages to collect
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::collect_failures;
///
/// let validation = collect_failures(["error1", "error2"]);
/// assert!(validation.is_failure());
///
/// let clean = collect_failures::<[&str; 0]>([]);
/// assert!(clean.is_success());
/// ```
#[inline]
pub fn collect_failures<I>(messages: I) -> Outcome<()>
where
    I: IntoIterator,
    I::Item: Into<Message>,
{
    let collected: MessageVec = messages.into_iter().map(Into::into).collect();
    if collected.is_empty() {
        Outcome::Success(())
    } else {
        Outcome::Failure(Messages::new(collected))
    }
}

/// Iterator returned by [`split_failures`].
pub enum SplitFailures<V> {
    Success(Option<V>),
    Failure(<MessageVec as IntoIterator>::IntoIter),
}

impl<V> Iterator for SplitFailures<V> {
    type Item = Result<V, Message>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Success(value) => value.take().map(Ok),
            Self::Failure(iter) => iter.next().map(Err),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Success(value) => {
                let len = usize::from(value.is_some());
                (len, Some(len))
            }
            Self::Failure(iter) => iter.size_hint(),
        }
    }
}

impl<V> ExactSizeIterator for SplitFailures<V> {}
impl<V> FusedIterator for SplitFailures<V> {}

/// Splits an `Outcome` into individual `Result` values.
///
/// A success yields a single `Ok`; a failure yields one `Err` per message,
/// in order.
///
/// # Arguments
///
/// * `outcome` - The outcome to split
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::split_failures;
/// use outcome_rail::Outcome;
///
/// let results: Vec<_> = split_failures(Outcome::success(42)).collect();
/// assert_eq!(results, vec![Ok(42)]);
///
/// let failed = Outcome::<i32>::failure_all(["err1", "err2"]);
/// let results: Vec<_> = split_failures(failed).collect();
/// assert_eq!(
///     results,
///     vec![Err("err1".to_string()), Err("err2".to_string())],
/// );
/// ```
pub fn split_failures<V>(outcome: Outcome<V>) -> SplitFailures<V> {
    match outcome {
        Outcome::Success(value) => SplitFailures::Success(Some(value)),
        Outcome::Failure(messages) => SplitFailures::Failure(messages.into_inner().into_iter()),
    }
}
