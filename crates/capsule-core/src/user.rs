//! User types.
//!
//! The user entity has no HTTP surface; it is retained for engine-level
//! compatibility with the original schema.

use serde::{Deserialize, Serialize};

use crate::UserId;

/// A stored user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-assigned identifier.
    pub id: UserId,

    /// Login name. The store does not enforce uniqueness; username lookup
    /// returns the first match in insertion order.
    pub username: String,

    /// Opaque password string.
    pub password: String,
}

/// The insertable form of a [`User`]: everything except the store-assigned
/// id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    /// Login name.
    pub username: String,

    /// Opaque password string.
    pub password: String,
}
