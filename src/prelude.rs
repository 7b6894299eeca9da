//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick
//! starts. Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`rules!`], [`failure!`]
//! - **Types**: [`Outcome`], [`Messages`], [`Message`], [`Rule`]
//! - **Functions and traits**: [`all`], [`ValidateExt`]
//! - **Modules**: [`adapt`](crate::adapt)
//!
//! # Examples
//!
//! ## 30-Second Quick Start
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! let checks = rules![
//!     |n: &i32| *n > 0 => "must be positive",
//!     |n: &i32| *n < 100 => "must be under 100",
//! ];
//!
//! let outcome = all(150, &checks);
//! assert_eq!(outcome.unwrap_or(0), 0);
//! ```

// Macros
pub use crate::{failure, rules};

// Core types
pub use crate::outcome::Outcome;
pub use crate::rules::{all, Rule, ValidateExt};
pub use crate::types::{Message, Messages};

// Adapters stay namespaced; their names are only meaningful qualified.
pub use crate::adapt;
