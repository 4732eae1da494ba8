//! The in-memory store implementation.
//!
//! [`MemoryStore`] owns three `BTreeMap`s keyed by typed id plus one next-id
//! counter per entity type, all behind a single `RwLock`. Ids are assigned
//! monotonically starting at 1, so ascending-key iteration over the maps
//! yields creation order for the `list_*` operations.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use capsule_core::{
    Character, CharacterId, Item, ItemId, NewCharacter, NewItem, NewUser, User, UserId,
    DEFAULT_BORDER_COLOR, DEFAULT_RESOURCE,
};

use crate::{seed, Store};

/// In-memory store state: the three collections and their id counters.
#[derive(Debug)]
struct Inner {
    users: BTreeMap<UserId, User>,
    characters: BTreeMap<CharacterId, Character>,
    items: BTreeMap<ItemId, Item>,
    next_user_id: UserId,
    next_character_id: CharacterId,
    next_item_id: ItemId,
}

impl Inner {
    fn new() -> Self {
        Self {
            users: BTreeMap::new(),
            characters: BTreeMap::new(),
            items: BTreeMap::new(),
            next_user_id: UserId::first(),
            next_character_id: CharacterId::first(),
            next_item_id: ItemId::first(),
        }
    }
}

/// The in-memory storage engine.
///
/// Constructed once by the service's initialization routine and shared via
/// `Arc`; there is no global instance. All operations complete immediately
/// with no I/O or suspension. See the [`Store`] trait for the contract.
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Create an empty store with all id counters at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::new()),
        }
    }

    /// Create a store populated with the seed dataset.
    ///
    /// Seeding runs to completion before this returns; there is no
    /// observable "seeding in progress" state.
    #[must_use]
    pub fn seeded() -> Self {
        let store = Self::new();
        seed::populate(&store);
        store
    }

    // A poisoned lock only means some writer panicked mid-call; each write
    // is a single map insert plus a counter bump under one guard, so the
    // state is never torn and the poison can be absorbed.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for MemoryStore {
    fn get_user(&self, id: UserId) -> Option<User> {
        self.read().users.get(&id).cloned()
    }

    fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.read()
            .users
            .values()
            .find(|user| user.username == username)
            .cloned()
    }

    fn create_user(&self, new_user: NewUser) -> User {
        let mut inner = self.write();
        let id = inner.next_user_id;
        inner.next_user_id = id.next();

        let user = User {
            id,
            username: new_user.username,
            password: new_user.password,
        };
        inner.users.insert(id, user.clone());
        user
    }

    fn list_characters(&self) -> Vec<Character> {
        self.read().characters.values().cloned().collect()
    }

    fn get_character(&self, id: CharacterId) -> Option<Character> {
        self.read().characters.get(&id).cloned()
    }

    fn create_character(&self, new_character: NewCharacter) -> Character {
        let mut inner = self.write();
        let id = inner.next_character_id;
        inner.next_character_id = id.next();

        let character = Character {
            id,
            name: new_character.name,
            traits: new_character.traits,
            avatar: new_character.avatar,
            bio: new_character.bio,
            border_color: new_character
                .border_color
                .filter(|color| !color.is_empty())
                .unwrap_or_else(|| DEFAULT_BORDER_COLOR.to_string()),
        };
        inner.characters.insert(id, character.clone());
        character
    }

    fn list_items(&self) -> Vec<Item> {
        self.read().items.values().cloned().collect()
    }

    fn list_items_by_character(&self, character_id: CharacterId) -> Vec<Item> {
        self.read()
            .items
            .values()
            .filter(|item| item.character_id == character_id)
            .cloned()
            .collect()
    }

    fn get_item(&self, id: ItemId) -> Option<Item> {
        self.read().items.get(&id).cloned()
    }

    fn create_item(&self, new_item: NewItem) -> Item {
        let mut inner = self.write();
        let id = inner.next_item_id;
        inner.next_item_id = id.next();

        let item = Item {
            id,
            character_id: new_item.character_id,
            title: new_item.title,
            description: new_item.description,
            significance: new_item.significance,
            category: new_item.category,
            resource: new_item
                .resource
                .filter(|resource| !resource.is_empty())
                .unwrap_or_else(|| DEFAULT_RESOURCE.to_string()),
        };
        inner.items.insert(id, item.clone());
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_character(name: &str, border_color: Option<&str>) -> NewCharacter {
        NewCharacter {
            name: name.to_string(),
            traits: vec!["Trait".into()],
            avatar: format!("/images/{}.jpeg", name.to_lowercase()),
            bio: "A test character.".into(),
            border_color: border_color.map(str::to_string),
        }
    }

    fn new_item(character_id: CharacterId, title: &str, resource: Option<&str>) -> NewItem {
        NewItem {
            character_id,
            title: title.to_string(),
            description: "A test artifact.".into(),
            significance: "It matters for the test.".into(),
            category: "Test".into(),
            resource: resource.map(str::to_string),
        }
    }

    #[test]
    fn character_ids_are_dense_and_monotonic() {
        let store = MemoryStore::new();

        for n in 1..=5 {
            let character = store.create_character(new_character("A", None));
            assert_eq!(character.id.as_i64(), n);
        }
    }

    #[test]
    fn entity_counters_are_independent() {
        let store = MemoryStore::new();

        let character = store.create_character(new_character("A", None));
        let item = store.create_item(new_item(character.id, "First", None));
        let user = store.create_user(NewUser {
            username: "ana".into(),
            password: "pw".into(),
        });

        // Each counter starts at 1 regardless of the others.
        assert_eq!(character.id.as_i64(), 1);
        assert_eq!(item.id.as_i64(), 1);
        assert_eq!(user.id.as_i64(), 1);
    }

    #[test]
    fn border_color_default_substitution() {
        let store = MemoryStore::new();

        let omitted = store.create_character(new_character("A", None));
        assert_eq!(omitted.border_color, "primary");

        let empty = store.create_character(new_character("B", Some("")));
        assert_eq!(empty.border_color, "primary");

        let explicit = store.create_character(new_character("C", Some("accent")));
        assert_eq!(explicit.border_color, "accent");
    }

    #[test]
    fn resource_default_substitution() {
        let store = MemoryStore::new();
        let character = store.create_character(new_character("A", None));

        let omitted = store.create_item(new_item(character.id, "First", None));
        assert_eq!(omitted.resource, "No resource available");

        let empty = store.create_item(new_item(character.id, "Second", Some("")));
        assert_eq!(empty.resource, "No resource available");

        let explicit = store.create_item(new_item(character.id, "Third", Some("foo")));
        assert_eq!(explicit.resource, "foo");
    }

    #[test]
    fn create_then_get_roundtrip() {
        let store = MemoryStore::new();

        let character = store.create_character(new_character("A", None));
        assert_eq!(store.get_character(character.id), Some(character.clone()));

        let item = store.create_item(new_item(character.id, "First", None));
        assert_eq!(store.get_item(item.id), Some(item));

        let user = store.create_user(NewUser {
            username: "ana".into(),
            password: "pw".into(),
        });
        assert_eq!(store.get_user(user.id), Some(user));
    }

    #[test]
    fn list_items_by_character_filters_in_creation_order() {
        let store = MemoryStore::new();
        let a = store.create_character(new_character("A", None));
        let b = store.create_character(new_character("B", None));

        let first = store.create_item(new_item(a.id, "First", None));
        store.create_item(new_item(b.id, "Second", None));
        let third = store.create_item(new_item(a.id, "Third", None));

        let items = store.list_items_by_character(a.id);
        assert_eq!(items, vec![first, third]);

        assert!(store
            .list_items_by_character(CharacterId::from_i64(99))
            .is_empty());
    }

    #[test]
    fn dangling_character_reference_is_accepted() {
        let store = MemoryStore::new();

        let item = store.create_item(new_item(CharacterId::from_i64(42), "Orphan", None));
        assert_eq!(item.character_id.as_i64(), 42);
        assert_eq!(store.list_items_by_character(item.character_id), vec![item]);
    }

    #[test]
    fn missing_lookups_return_none() {
        let store = MemoryStore::new();

        assert_eq!(store.get_character(CharacterId::from_i64(9999)), None);
        assert_eq!(store.get_item(ItemId::from_i64(9999)), None);
        assert_eq!(store.get_user(UserId::from_i64(9999)), None);
        assert_eq!(store.get_user_by_username("nobody"), None);
    }

    #[test]
    fn duplicate_usernames_coexist_and_lookup_returns_first() {
        let store = MemoryStore::new();

        let first = store.create_user(NewUser {
            username: "ana".into(),
            password: "one".into(),
        });
        let second = store.create_user(NewUser {
            username: "ana".into(),
            password: "two".into(),
        });
        assert_ne!(first.id, second.id);

        let found = store.get_user_by_username("ana").unwrap();
        assert_eq!(found, first);
    }

    #[test]
    fn list_characters_preserves_creation_order() {
        let store = MemoryStore::new();
        store.create_character(new_character("A", None));
        store.create_character(new_character("B", None));
        store.create_character(new_character("C", None));

        let names: Vec<_> = store
            .list_characters()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }
}
