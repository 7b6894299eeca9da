use crate::types::{Message, MessageVec};
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::Index;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

/// Error returned when a message sequence would be empty.
///
/// A failure with nothing to say is a programmer error, not a state the
/// crate represents; checked constructors surface it as this value and
/// panicking constructors fail fast with the same wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyMessages;

impl fmt::Display for EmptyMessages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a failure requires at least one message")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EmptyMessages {}

/// Ordered, non-empty sequence of failure messages.
///
/// Wraps the underlying storage (currently [`MessageVec`]) so every
/// construction path upholds the length >= 1 invariant. Order is preserved
/// on [`push`](Messages::push) and [`append`](Messages::append), so a
/// concatenated failure reads its violations in evaluation order.
///
/// # Serde Support
///
/// With the `serde` feature, `Messages` serializes as a plain sequence and
/// deserialization is routed through [`TryFrom`], so an empty sequence on
/// the wire is rejected instead of producing a degenerate value.
///
/// # Examples
///
/// ```
/// use outcome_rail::Messages;
///
/// let mut messages = Messages::single("must be positive");
/// messages.push("must be even");
///
/// assert_eq!(messages.len(), 2);
/// assert_eq!(messages.first(), "must be positive");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(into = "MessageVec", try_from = "MessageVec")
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    items: MessageVec,
}

impl Messages {
    /// Creates a sequence holding one message.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Messages;
    ///
    /// let messages = Messages::single("missing field");
    /// assert_eq!(messages.len(), 1);
    /// ```
    #[inline]
    pub fn single(message: impl Into<Message>) -> Self {
        Self {
            items: smallvec![message.into()],
        }
    }

    /// Collects messages from an iterator, rejecting an empty one.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{EmptyMessages, Messages};
    ///
    /// assert!(Messages::try_new(["a", "b"]).is_ok());
    /// assert_eq!(Messages::try_new::<[&str; 0]>([]), Err(EmptyMessages));
    /// ```
    #[inline]
    pub fn try_new<I>(messages: I) -> Result<Self, EmptyMessages>
    where
        I: IntoIterator,
        I::Item: Into<Message>,
    {
        let items: MessageVec = messages.into_iter().map(Into::into).collect();
        if items.is_empty() {
            Err(EmptyMessages)
        } else {
            Ok(Self { items })
        }
    }

    /// Collects messages from an iterator.
    ///
    /// # Panics
    ///
    /// Panics if `messages` yields no items; use
    /// [`try_new`](Messages::try_new) when emptiness is not a bug at the
    /// call site.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Messages;
    ///
    /// let messages = Messages::new(["first", "second"]);
    /// assert_eq!(messages.len(), 2);
    /// ```
    #[inline]
    pub fn new<I>(messages: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Message>,
    {
        Self::try_new(messages).expect("a failure requires at least one message")
    }

    /// Appends a single message, preserving insertion order.
    #[inline]
    pub fn push(&mut self, message: impl Into<Message>) {
        self.items.push(message.into());
    }

    /// Appends every message of `other` after the existing ones.
    #[inline]
    pub fn append(&mut self, other: Messages) {
        self.items.extend(other.items);
    }

    /// Returns the number of messages; always at least 1.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the first message.
    ///
    /// Total by construction: the sequence is never empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> &Message {
        &self.items[0]
    }

    /// Returns the messages as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Message] {
        &self.items
    }

    /// Returns an iterator over the messages.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Message> {
        self.items.iter()
    }

    /// Returns a mutable iterator over the messages.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, Message> {
        self.items.iter_mut()
    }

    /// Consumes the sequence and returns the underlying storage.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> MessageVec {
        self.items
    }

    /// Consumes the sequence and returns the first message.
    #[inline]
    #[must_use]
    pub fn into_first(self) -> Message {
        self.items
            .into_iter()
            .next()
            .expect("Messages is never empty")
    }
}

impl fmt::Display for Messages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, message) in self.items.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            f.write_str(message)?;
        }
        Ok(())
    }
}

impl PartialOrd for Messages {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Messages {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.items.cmp(&other.items)
    }
}

impl Hash for Messages {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

impl Index<usize> for Messages {
    type Output = Message;

    fn index(&self, index: usize) -> &Message {
        &self.items[index]
    }
}

impl TryFrom<MessageVec> for Messages {
    type Error = EmptyMessages;

    fn try_from(items: MessageVec) -> Result<Self, Self::Error> {
        if items.is_empty() {
            Err(EmptyMessages)
        } else {
            Ok(Self { items })
        }
    }
}

impl From<Messages> for MessageVec {
    fn from(messages: Messages) -> Self {
        messages.items
    }
}

impl Extend<Message> for Messages {
    fn extend<I: IntoIterator<Item = Message>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl IntoIterator for Messages {
    type Item = Message;
    type IntoIter = smallvec::IntoIter<[Message; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Messages {
    type Item = &'a Message;
    type IntoIter = core::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a mut Messages {
    type Item = &'a mut Message;
    type IntoIter = core::slice::IterMut<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}
