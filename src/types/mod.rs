//! Message storage types.
//!
//! Failure text flows through the whole crate as [`Message`] values collected
//! into a [`MessageVec`]; [`Messages`] layers the non-empty guarantee on top.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Messages;
//!
//! let messages = Messages::new(["must be positive", "must be even"]);
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages.to_string(), "must be positive; must be even");
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod messages;

pub use messages::*;

use crate::types::alloc_type::String;

/// Text carried by one failed check.
pub type Message = String;

/// SmallVec-backed sequence used for accumulating failure messages.
///
/// Uses inline storage for up to 1 element to avoid heap allocations
/// in the common case where a value violates only a single rule.
pub type MessageVec = SmallVec<[Message; 1]>;
