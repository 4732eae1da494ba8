//! In-memory storage layer for the capsule content store.
//!
//! This crate provides the storage engine behind the capsule API: three
//! id-keyed collections (users, characters, items) with create/read
//! operations, per-entity sequential id assignment, and default-value
//! normalization.
//!
//! # Architecture
//!
//! The [`Store`] trait defines the public contract. [`MemoryStore`] is the
//! sole implementation: process-local maps behind a lock, no I/O, no
//! suspension points. State lives for the life of the process; a restart
//! discards everything and re-runs seed population.
//!
//! # Example
//!
//! ```
//! use capsule_store::{MemoryStore, Store};
//!
//! let store = MemoryStore::seeded();
//!
//! let characters = store.list_characters();
//! assert_eq!(characters.len(), 3);
//!
//! let items = store.list_items_by_character(characters[0].id);
//! assert!(!items.is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod memory;
pub mod seed;

pub use memory::MemoryStore;

use capsule_core::{Character, CharacterId, Item, ItemId, NewCharacter, NewItem, NewUser, User, UserId};

/// The storage trait defining all store operations.
///
/// This trait abstracts the storage layer so the service and tests can share
/// one contract. All methods are synchronous and infallible: "not found" is
/// an absent value (`None` or an empty `Vec`), never an error, and no
/// operation validates input beyond the default substitution documented on
/// the create methods. Returned records are owned clones; callers never
/// observe the live collections.
pub trait Store: Send + Sync {
    // =========================================================================
    // User Operations
    // =========================================================================

    /// Get a user by id.
    fn get_user(&self, id: UserId) -> Option<User>;

    /// Get a user by username.
    ///
    /// Linear scan; returns the first match in insertion order. Usernames
    /// are not required to be unique, so duplicates shadow each other here.
    fn get_user_by_username(&self, username: &str) -> Option<User>;

    /// Create a user, assigning the next user id.
    ///
    /// No uniqueness check is performed on the username.
    fn create_user(&self, new_user: NewUser) -> User;

    // =========================================================================
    // Character Operations
    // =========================================================================

    /// List all characters in creation order.
    fn list_characters(&self) -> Vec<Character>;

    /// Get a character by id.
    fn get_character(&self, id: CharacterId) -> Option<Character>;

    /// Create a character, assigning the next character id.
    ///
    /// A missing or empty `border_color` is replaced with
    /// [`capsule_core::DEFAULT_BORDER_COLOR`].
    fn create_character(&self, new_character: NewCharacter) -> Character;

    // =========================================================================
    // Item Operations
    // =========================================================================

    /// List all items in creation order.
    fn list_items(&self) -> Vec<Item>;

    /// List the items owned by a character, in creation order.
    ///
    /// Returns an empty `Vec` when no item references the id. The character
    /// itself is not looked up, so "unknown character" and "character with
    /// no items" are indistinguishable here.
    fn list_items_by_character(&self, character_id: CharacterId) -> Vec<Item>;

    /// Get an item by id.
    fn get_item(&self, id: ItemId) -> Option<Item>;

    /// Create an item, assigning the next item id.
    ///
    /// A missing or empty `resource` is replaced with
    /// [`capsule_core::DEFAULT_RESOURCE`]. The `character_id` is stored as
    /// given; no check is made that the character exists.
    fn create_item(&self, new_item: NewItem) -> Item;
}
