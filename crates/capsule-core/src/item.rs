//! Time capsule item types.
//!
//! An item is a media/text artifact owned by a character: a title, a
//! description, a note on why it matters, a display category, and an optional
//! resource pointer.

use serde::{Deserialize, Serialize};

use crate::{CharacterId, ItemId};

/// Resource text substituted when an item is created without one.
pub const DEFAULT_RESOURCE: &str = "No resource available";

/// A stored time capsule item.
///
/// Items are created during seed population and are immutable thereafter.
/// `resource` is always present: the store substitutes [`DEFAULT_RESOURCE`]
/// at creation when the insertable form omits it.
///
/// `character_id` references the owning [`Character`](crate::Character) by
/// id. The store performs no referential-integrity check; a dangling
/// reference is accepted silently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Store-assigned identifier.
    pub id: ItemId,

    /// Id of the owning character.
    pub character_id: CharacterId,

    /// Display title.
    pub title: String,

    /// Free-text description of the artifact.
    pub description: String,

    /// Why the artifact matters.
    pub significance: String,

    /// Free-text tag used for display grouping and coloring.
    pub category: String,

    /// Free-text resource note.
    pub resource: String,
}

/// The insertable form of an [`Item`]: everything except the store-assigned
/// id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    /// Id of the owning character.
    pub character_id: CharacterId,

    /// Display title.
    pub title: String,

    /// Free-text description of the artifact.
    pub description: String,

    /// Why the artifact matters.
    pub significance: String,

    /// Free-text tag used for display grouping and coloring.
    pub category: String,

    /// Free-text resource note. `None` or an empty string means "use the
    /// default"; the store substitutes [`DEFAULT_RESOURCE`].
    #[serde(default)]
    pub resource: Option<String>,
}
