//! Order-Form-Validation Core
//!
//! Pure rule primitives shared by the order form schema and the validated
//! domain types. Compatible with both std and no_std environments.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod collection;
pub mod string;

// Re-export all validators
pub use collection::*;
pub use string::*;

/// Outcome of a single rule check.
///
/// Rules never carry a message: the schema that owns the rule decides what the
/// user sees for each field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleViolation {
    /// The value was empty (after trimming, for text).
    Missing,
    /// The value was shorter than `min` characters.
    BelowMinLength { min: usize, actual: usize },
}
