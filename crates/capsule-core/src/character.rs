//! Character types for the capsule store.
//!
//! A character is one of the curated personas owning a collection of time
//! capsule items.

use serde::{Deserialize, Serialize};

use crate::CharacterId;

/// Border color token substituted when a character is created without one.
pub const DEFAULT_BORDER_COLOR: &str = "primary";

/// A stored character record.
///
/// Characters are created during seed population and are immutable
/// thereafter. `border_color` is always present: the store substitutes
/// [`DEFAULT_BORDER_COLOR`] at creation when the insertable form omits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Store-assigned identifier.
    pub id: CharacterId,

    /// Display name.
    pub name: String,

    /// Short trait strings, in display order.
    pub traits: Vec<String>,

    /// Path to the character's avatar image.
    pub avatar: String,

    /// Free-text biography.
    pub bio: String,

    /// Style token used by the UI for the character's border.
    pub border_color: String,
}

/// The insertable form of a [`Character`]: everything except the
/// store-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCharacter {
    /// Display name.
    pub name: String,

    /// Short trait strings, in display order.
    pub traits: Vec<String>,

    /// Path to the character's avatar image.
    pub avatar: String,

    /// Free-text biography.
    pub bio: String,

    /// Style token for the character's border. `None` or an empty string
    /// means "use the default"; the store substitutes
    /// [`DEFAULT_BORDER_COLOR`].
    #[serde(default)]
    pub border_color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_serializes_with_camel_case_keys() {
        let character = Character {
            id: CharacterId::from_i64(1),
            name: "Bria Reign".into(),
            traits: vec!["Sassy".into()],
            avatar: "/images/bria.jpeg".into(),
            bio: "bio".into(),
            border_color: "primary".into(),
        };

        let json = serde_json::to_value(&character).unwrap();
        assert_eq!(json["borderColor"], "primary");
        assert_eq!(json["id"], 1);
    }

    #[test]
    fn new_character_border_color_defaults_to_none() {
        let json = r#"{"name":"Jax","traits":[],"avatar":"/images/jax.jpeg","bio":"b"}"#;
        let new_character: NewCharacter = serde_json::from_str(json).unwrap();
        assert_eq!(new_character.border_color, None);
    }
}
