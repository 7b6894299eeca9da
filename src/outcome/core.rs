use crate::types::{Message, Messages};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of validating a value: a success value or accumulated failures.
///
/// `Outcome<V>` represents a computation that either succeeded with a value
/// of type `V` or failed with one or more messages. Unlike `Result`, which
/// fails fast on the first error, outcomes are combined with
/// [`concat`](Outcome::concat) so that every failure is kept, making the
/// type suitable for form validation and other scenarios where the caller
/// wants the complete list of problems at once.
///
/// Both variants are public so matching stays exhaustive; the
/// [`Messages`] payload cannot be constructed empty, which keeps direct
/// `Failure` construction sound.
///
/// # Serde Support
///
/// `Outcome` implements `Serialize` and `Deserialize` when `V` does.
///
/// # Variants
///
/// * `Success(V)` - Holds exactly one validated value
/// * `Failure(Messages)` - Holds one or more failure messages in
///   evaluation order
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let ok = Outcome::success(42);
/// assert!(ok.is_success());
///
/// let bad = Outcome::<i32>::failure("out of range");
/// assert!(bad.is_failure());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<V> {
    Success(V),
    Failure(Messages),
}

impl<V> Outcome<V> {
    /// Creates a successful outcome.
    ///
    /// # Arguments
    ///
    /// * `value` - The validated value to wrap
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::success(42);
    /// assert_eq!(outcome.into_value(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn success(value: V) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome from a single message.
    ///
    /// # Arguments
    ///
    /// * `message` - The failure message to wrap
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<i32>::failure("missing field");
    /// assert!(outcome.is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn failure(message: impl Into<Message>) -> Self {
        Self::Failure(Messages::single(message))
    }

    /// Creates a failed outcome from an iterator of messages.
    ///
    /// # Arguments
    ///
    /// * `messages` - An iterator of messages to collect, in order
    ///
    /// # Panics
    ///
    /// Panics if `messages` yields no items; a failure with nothing to say
    /// is a programmer error. Build a [`Messages`] with
    /// [`Messages::try_new`](crate::Messages::try_new) first when the
    /// sequence may legitimately be empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<i32>::failure_all(["missing", "invalid"]);
    /// assert_eq!(outcome.iter_messages().count(), 2);
    /// ```
    #[must_use]
    #[inline]
    pub fn failure_all<I>(messages: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Message>,
    {
        Self::Failure(Messages::new(messages))
    }

    /// Returns `true` if the outcome holds a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert!(Outcome::success(42).is_success());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the outcome holds failure messages.
    ///
    /// Exact complement of [`is_success`](Outcome::is_success).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert!(Outcome::<i32>::failure("error").is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Maps the success value using the provided function.
    ///
    /// If the outcome is a failure, the messages are carried forward
    /// unchanged and `transform` is never invoked.
    ///
    /// # Arguments
    ///
    /// * `transform` - A function from the value type `V` to type `Y`
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let doubled = Outcome::success(21).map(|n| n * 2);
    /// assert_eq!(doubled.into_value(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn map<Y, F>(self, transform: F) -> Outcome<Y>
    where
        F: FnOnce(V) -> Y,
    {
        match self {
            Self::Success(value) => Outcome::Success(transform(value)),
            Self::Failure(messages) => Outcome::Failure(messages),
        }
    }

    /// Chains a computation that itself produces an outcome.
    ///
    /// Behaves like [`Result::and_then`]: `next` is invoked only for a
    /// success, and its outcome is returned directly without double
    /// wrapping. A failure carries its messages forward unchanged.
    ///
    /// # Arguments
    ///
    /// * `next` - Function producing the next validation step
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn halve(n: i32) -> Outcome<i32> {
    ///     if n % 2 == 0 {
    ///         Outcome::success(n / 2)
    ///     } else {
    ///         Outcome::failure("not even")
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::success(4).and_then(halve).into_value(), Some(2));
    /// assert!(Outcome::success(3).and_then(halve).is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn and_then<Y, F>(self, next: F) -> Outcome<Y>
    where
        F: FnOnce(V) -> Outcome<Y>,
    {
        match self {
            Self::Success(value) => next(value),
            Self::Failure(messages) => Outcome::Failure(messages),
        }
    }

    /// Combines two outcomes, accumulating failures.
    ///
    /// The accumulation algebra, spelled out per variant pair:
    ///
    /// * `Success.concat(Success)` -> `other` (last success wins, so a fold
    ///   reflects the most recent value deterministically)
    /// * `Success.concat(Failure)` -> the failure, unchanged
    /// * `Failure.concat(Success)` -> `self`, unchanged; the success value
    ///   is discarded
    /// * `Failure.concat(Failure)` -> one failure holding the left messages
    ///   followed by the right messages, in that order
    ///
    /// Any failure is sticky: once a fold over outcomes has failed it can
    /// only gather more messages, never recover. Concatenation is
    /// associative but not commutative; message order matters.
    ///
    /// # Arguments
    ///
    /// * `other` - The outcome evaluated after `self`
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let merged = Outcome::<i32>::failure("too small")
    ///     .concat(Outcome::success(9))
    ///     .concat(Outcome::failure("not even"));
    ///
    /// let messages: Vec<_> = merged.iter_messages().cloned().collect();
    /// assert_eq!(messages, vec!["too small", "not even"]);
    /// ```
    #[must_use]
    #[inline]
    pub fn concat(self, other: Self) -> Self {
        match (self, other) {
            (Self::Success(_), Self::Success(value)) => Self::Success(value),
            (Self::Success(_), Self::Failure(messages)) => Self::Failure(messages),
            (failure @ Self::Failure(_), Self::Success(_)) => failure,
            (Self::Failure(mut left), Self::Failure(right)) => {
                left.append(right);
                Self::Failure(left)
            }
        }
    }

    /// Invokes `action` with the value when the outcome is a success.
    ///
    /// Returns the outcome unchanged either way, so side-effecting
    /// inspection can be chained without disturbing the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut seen = None;
    /// let outcome = Outcome::success(42).inspect(|n| seen = Some(*n));
    ///
    /// assert_eq!(seen, Some(42));
    /// assert!(outcome.is_success());
    /// ```
    #[inline]
    pub fn inspect<F>(self, action: F) -> Self
    where
        F: FnOnce(&V),
    {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Invokes `action` with the messages when the outcome is a failure.
    ///
    /// The action always receives the full message sequence; returns the
    /// outcome unchanged either way.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut count = 0;
    /// let outcome = Outcome::<i32>::failure_all(["a", "b"])
    ///     .inspect_failure(|messages| count = messages.len());
    ///
    /// assert_eq!(count, 2);
    /// assert!(outcome.is_failure());
    /// ```
    #[inline]
    pub fn inspect_failure<F>(self, action: F) -> Self
    where
        F: FnOnce(&Messages),
    {
        if let Self::Failure(messages) = &self {
            action(messages);
        }
        self
    }

    /// Returns the value for a success, or `default` for a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::success(42).unwrap_or(0), 42);
    /// assert_eq!(Outcome::<i32>::failure("error").unwrap_or(0), 0);
    /// ```
    #[must_use]
    #[inline]
    pub fn unwrap_or(self, default: V) -> V {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the value for a success, or computes one for a failure.
    ///
    /// `factory` is not invoked for a success.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::success(42).unwrap_or_else(|| 0), 42);
    /// assert_eq!(Outcome::<i32>::failure("error").unwrap_or_else(|| 0), 0);
    /// ```
    #[must_use]
    #[inline]
    pub fn unwrap_or_else<F>(self, factory: F) -> V
    where
        F: FnOnce() -> V,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => factory(),
        }
    }

    /// Converts to a `Result`, manufacturing the error for a failure.
    ///
    /// `factory` is never invoked for a success. The accumulated messages
    /// are discarded; use [`to_result`](Outcome::to_result) to keep them.
    ///
    /// # Arguments
    ///
    /// * `factory` - Produces the error value for the `Err` branch
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::success(42).ok_or_else(|| "rejected"), Ok(42));
    /// assert_eq!(
    ///     Outcome::<i32>::failure("bad").ok_or_else(|| "rejected"),
    ///     Err("rejected"),
    /// );
    /// ```
    #[inline]
    pub fn ok_or_else<E, F>(self, factory: F) -> Result<V, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(factory()),
        }
    }

    /// Converts into a `Result`, keeping the full message sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::success(42).to_result(), Ok(42));
    ///
    /// let err = Outcome::<i32>::failure("error").to_result().unwrap_err();
    /// assert_eq!(err.len(), 1);
    /// ```
    #[inline]
    pub fn to_result(self) -> Result<V, Messages> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(messages) => Err(messages),
        }
    }

    /// Wraps a plain `Result`, turning the error into a singleton failure.
    ///
    /// # Arguments
    ///
    /// * `result` - The result to convert
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::from_result(Ok::<_, &str>(42));
    /// assert!(outcome.is_success());
    /// ```
    #[must_use]
    #[inline]
    pub fn from_result<E>(result: Result<V, E>) -> Self
    where
        E: Into<Message>,
    {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::failure(error),
        }
    }

    /// Extracts the value, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::success(42).into_value(), Some(42));
    /// assert_eq!(Outcome::<i32>::failure("error").into_value(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<V> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Extracts the message sequence, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let messages = Outcome::<i32>::failure("error").into_messages();
    /// assert_eq!(messages.unwrap().len(), 1);
    /// ```
    #[must_use]
    #[inline]
    pub fn into_messages(self) -> Option<Messages> {
        match self {
            Self::Success(_) => None,
            Self::Failure(messages) => Some(messages),
        }
    }
}
