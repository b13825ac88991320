//! # Favorites store
//!
//! An insertion-ordered set of [`ItemId`]s mirrored to durable storage as a
//! JSON array. Every mutation is written through immediately; the initial
//! state is read from the same key. A missing key, or a value that is not a
//! JSON array of ids, loads as the empty set.

use crate::models::ItemId;
use crate::storage::{load_json, save_json, KeyValueStore};

/// Favorite item ids backed by a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct Favorites<S> {
    storage: S,
    key: String,
    ids: Vec<ItemId>,
}

impl<S: KeyValueStore> Favorites<S> {
    /// Restore favorites from `key`, defaulting to empty.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let mut ids: Vec<ItemId> = match load_json(&storage, &key) {
            Ok(ids) => ids.unwrap_or_default(),
            Err(e) => {
                tracing::warn!("Ignoring stored favorites: {}", e);
                Vec::new()
            }
        };
        // Keep the first occurrence of each id
        let mut seen = Vec::with_capacity(ids.len());
        ids.retain(|id| {
            if seen.contains(id) {
                false
            } else {
                seen.push(*id);
                true
            }
        });
        Self { storage, key, ids }
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.ids.contains(&id)
    }

    /// Add `id` if absent, remove it if present. Returns the new membership.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        let now_favorite = match self.ids.iter().position(|x| *x == id) {
            Some(index) => {
                self.ids.remove(index);
                false
            }
            None => {
                self.ids.push(id);
                true
            }
        };
        self.persist();
        tracing::info!(item = id, favorite = now_favorite, "Toggled favorite");
        now_favorite
    }

    /// Ids in the order they were favorited.
    pub fn ids(&self) -> &[ItemId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn persist(&self) {
        if let Err(e) = save_json(&self.storage, &self.key, &self.ids) {
            tracing::warn!("Failed to persist favorites: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;

    const KEY: &str = "storyswap-favorites";

    #[test]
    fn test_starts_empty_without_stored_value() {
        let favorites = Favorites::load(MemoryStorage::new(), KEY);
        assert!(favorites.is_empty());
        assert!(!favorites.contains(1));
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let storage = MemoryStorage::new();
        let mut favorites = Favorites::load(storage.clone(), KEY);

        assert!(favorites.toggle(2));
        assert!(favorites.contains(2));
        assert_eq!(storage.get(KEY).as_deref(), Some("[2]"));

        assert!(!favorites.toggle(2));
        assert!(!favorites.contains(2));
        assert_eq!(storage.get(KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        let mut favorites = Favorites::load(MemoryStorage::new(), KEY);
        favorites.toggle(1);

        for id in [1, 3] {
            let before = favorites.contains(id);
            favorites.toggle(id);
            favorites.toggle(id);
            assert_eq!(favorites.contains(id), before);
        }
        assert_eq!(favorites.ids(), &[1]);
    }

    #[test]
    fn test_reload_matches_persisted_set() {
        let storage = MemoryStorage::new();
        let mut favorites = Favorites::load(storage.clone(), KEY);
        favorites.toggle(4);
        favorites.toggle(1);
        favorites.toggle(3);
        favorites.toggle(1);

        let reloaded = Favorites::load(storage, KEY);
        assert_eq!(reloaded.ids(), favorites.ids());
        assert_eq!(reloaded.ids(), &[4, 3]);
    }

    #[test]
    fn test_malformed_value_loads_empty() {
        for raw in ["not json", "{\"ids\":[1]}", "[1, \"two\"]", ""] {
            let storage = MemoryStorage::new();
            storage.set(KEY, raw);
            let favorites = Favorites::load(storage, KEY);
            assert!(favorites.is_empty(), "expected empty set for {raw:?}");
        }
    }

    #[test]
    fn test_duplicate_stored_ids_collapse() {
        let storage = MemoryStorage::new();
        storage.set(KEY, "[2,2,1,2]");
        let favorites = Favorites::load(storage, KEY);
        assert_eq!(favorites.ids(), &[2, 1]);
    }
}
