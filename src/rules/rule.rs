use crate::outcome::Outcome;
use crate::types::alloc_type::Box;
use crate::types::{Message, Messages};
use core::fmt;

/// A single validation rule: a condition paired with a message producer.
///
/// The condition decides whether a value passes; the message producer is
/// consulted only when it does not. Both closures must be pure with respect
/// to the outcome's correctness guarantees: the same value is expected to
/// validate the same way every time. Panics raised by either closure
/// propagate to the caller unmasked.
///
/// # Examples
///
/// ```
/// use outcome_rail::rules::Rule;
///
/// let positive = Rule::new(
///     |n: &i32| *n > 0,
///     |n| format!("{n} is not positive"),
/// );
///
/// assert!(positive.validate(3).is_success());
/// assert!(positive.validate(-3).is_failure());
/// ```
pub struct Rule<V> {
    condition: Box<dyn Fn(&V) -> bool>,
    message_of: Box<dyn Fn(&V) -> Message>,
}

impl<V> Rule<V> {
    /// Creates a rule from a condition and a message producer.
    ///
    /// # Arguments
    ///
    /// * `condition` - Predicate deciding whether a value passes
    /// * `message_of` - Produces the failure message from the rejected
    ///   value; invoked only on failure
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::rules::Rule;
    ///
    /// let short = Rule::new(
    ///     |s: &String| s.len() <= 8,
    ///     |s| format!("{s:?} is longer than 8 bytes"),
    /// );
    ///
    /// assert!(short.validate("ok".to_string()).is_success());
    /// ```
    pub fn new<C, M, S>(condition: C, message_of: M) -> Self
    where
        C: Fn(&V) -> bool + 'static,
        M: Fn(&V) -> S + 'static,
        S: Into<Message>,
    {
        Self {
            condition: Box::new(condition),
            message_of: Box::new(move |value| message_of(value).into()),
        }
    }

    /// Creates a rule whose failure message does not depend on the value.
    ///
    /// # Arguments
    ///
    /// * `condition` - Predicate deciding whether a value passes
    /// * `message` - The fixed failure message
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::rules::Rule;
    ///
    /// let even = Rule::with_message(|n: &i32| *n % 2 == 0, "must be even");
    /// assert!(even.validate(3).is_failure());
    /// ```
    pub fn with_message<C>(condition: C, message: impl Into<Message>) -> Self
    where
        C: Fn(&V) -> bool + 'static,
    {
        let message = message.into();
        Self {
            condition: Box::new(condition),
            message_of: Box::new(move |_| message.clone()),
        }
    }

    /// Runs the rule against a value.
    ///
    /// Returns `Success(value)` when the condition holds, otherwise a
    /// single-message failure produced from the rejected value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::rules::Rule;
    ///
    /// let under = Rule::with_message(|n: &i32| *n < 100, "must be under 100");
    ///
    /// assert_eq!(under.validate(4).into_value(), Some(4));
    ///
    /// let messages = under.validate(150).into_messages().unwrap();
    /// assert_eq!(messages[0], "must be under 100");
    /// ```
    pub fn validate(&self, value: V) -> Outcome<V> {
        if (self.condition)(&value) {
            Outcome::Success(value)
        } else {
            let message = (self.message_of)(&value);
            Outcome::Failure(Messages::single(message))
        }
    }
}

impl<V> fmt::Debug for Rule<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").finish_non_exhaustive()
    }
}
