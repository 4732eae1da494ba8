//! Identifier types for the capsule store.
//!
//! This module provides strongly-typed identifiers for users, characters, and items.
//!
//! # Macro-based ID Types
//!
//! The `sequential_id_type!` macro reduces boilerplate for counter-assigned
//! identifier types, ensuring consistent implementation of serialization,
//! parsing, and display traits.
//!
//! Identifiers are assigned by the store from per-entity counters starting at
//! 1, so the three types are numerically independent: a `CharacterId` of 1
//! and an `ItemId` of 1 refer to unrelated records. The newtypes keep the
//! counters from being mixed up at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Macro to define a counter-assigned identifier type with standard trait
/// implementations.
///
/// This macro generates a newtype wrapper around `i64` with implementations for:
/// - `Clone`, `Copy`, `PartialEq`, `Eq`, `PartialOrd`, `Ord`, `Hash`
/// - `Serialize`, `Deserialize` (transparent, as a bare JSON number)
/// - `FromStr`, `Display`, `Debug`
///
/// # Example
///
/// ```ignore
/// sequential_id_type!(MyId, "A custom identifier type.");
/// let id = MyId::first();
/// assert_eq!(id.next().as_i64(), 2);
/// ```
macro_rules! sequential_id_type {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// The first identifier a fresh store assigns.
            #[must_use]
            pub const fn first() -> Self {
                Self(1)
            }

            /// Create an identifier from a raw value.
            #[must_use]
            pub const fn from_i64(value: i64) -> Self {
                Self(value)
            }

            /// Return the raw identifier value.
            #[must_use]
            pub const fn as_i64(self) -> i64 {
                self.0
            }

            /// The identifier assigned after this one.
            #[must_use]
            pub const fn next(self) -> Self {
                Self(self.0 + 1)
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s.parse::<i64>().map_err(|_| IdError::InvalidNumber)?;
                Ok(Self(value))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define the identifier types using the macro
sequential_id_type!(
    UserId,
    "A user identifier.\n\nAssigned sequentially by the store, starting at 1."
);
sequential_id_type!(
    CharacterId,
    "A character identifier.\n\nAssigned sequentially by the store, starting at 1. Items reference their owning character through this id."
);
sequential_id_type!(
    ItemId,
    "A time capsule item identifier.\n\nAssigned sequentially by the store, starting at 1, independently of character ids."
);

/// Errors that can occur when parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The input is not a valid integer identifier.
    #[error("invalid identifier: expected an integer")]
    InvalidNumber,
}
