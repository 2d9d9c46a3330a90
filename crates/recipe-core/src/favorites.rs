//! Favorites Store
//!
//! Set of favorite recipe ids, persisted as a JSON array of strings.
//! Storage problems never reach the caller: unreadable records load as an
//! empty set and failed writes are only logged.

use crate::error::StorageError;
use crate::storage::KeyValueStorage;

/// Storage key for the persisted favorites record
pub const FAVORITES_KEY: &str = "recipe-favorites";

/// Favorite recipe ids with injected persistence
///
/// Ids are unique and kept in insertion order.
#[derive(Debug, Clone)]
pub struct FavoritesStore<S: KeyValueStorage> {
    storage: S,
    key: String,
    ids: Vec<String>,
}

impl<S: KeyValueStorage> FavoritesStore<S> {
    /// Load favorites stored under [`FAVORITES_KEY`]
    pub fn load(storage: S) -> Self {
        Self::load_with_key(storage, FAVORITES_KEY)
    }

    /// Load favorites stored under a custom key
    pub fn load_with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let ids = match read_ids(&storage, &key) {
            Ok(ids) => ids,
            Err(e) => {
                log::warn!("[FAVORITES] Discarding stored favorites: {}", e);
                Vec::new()
            }
        };
        log::debug!("[FAVORITES] Loaded {} favorites", ids.len());
        Self { storage, key, ids }
    }

    /// Add `id`; returns false if it was already a favorite
    pub fn add(&mut self, id: &str) -> bool {
        if self.is_favorite(id) {
            return false;
        }
        self.ids.push(id.to_string());
        self.persist();
        true
    }

    /// Remove `id`; returns false if it was not a favorite
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| existing != id);
        if self.ids.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Flip membership of `id` and return the new state
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.is_favorite(id) {
            self.remove(id);
            false
        } else {
            self.add(id);
            true
        }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    pub fn count(&self) -> usize {
        self.ids.len()
    }

    /// Favorite ids in insertion order
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn persist(&self) {
        let json = match serde_json::to_string(&self.ids) {
            Ok(json) => json,
            Err(e) => {
                log::error!("[FAVORITES] Failed to encode favorites: {}", e);
                return;
            }
        };
        match self.storage.write(&self.key, &json) {
            Ok(()) => log::debug!("[FAVORITES] Saved {} favorites", self.ids.len()),
            Err(e) => log::error!("[FAVORITES] Failed to save favorites: {}", e),
        }
    }
}

/// Read and decode the stored record, dropping duplicate ids
fn read_ids<S: KeyValueStorage>(storage: &S, key: &str) -> Result<Vec<String>, StorageError> {
    let Some(raw) = storage.read(key)? else {
        return Ok(Vec::new());
    };
    let stored: Vec<String> = serde_json::from_str(&raw)
        .map_err(|source| StorageError::Corrupt { key: key.to_string(), source })?;

    let mut ids: Vec<String> = Vec::with_capacity(stored.len());
    for id in stored {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_load_without_record_is_empty() {
        let storage = MemoryStorage::new();
        let store = FavoritesStore::load(&storage);

        assert_eq!(store.count(), 0);
        assert_eq!(store.key(), FAVORITES_KEY);
        assert_eq!(storage.writes(), 0);
    }

    #[test]
    fn test_add_persists_json_array() {
        let storage = MemoryStorage::new();
        let mut store = FavoritesStore::load(&storage);

        assert!(store.add("1"));
        assert!(store.add("3"));

        assert_eq!(storage.get(FAVORITES_KEY).as_deref(), Some(r#"["1","3"]"#));
    }

    #[test]
    fn test_add_is_idempotent() {
        let storage = MemoryStorage::new();
        let mut store = FavoritesStore::load(&storage);

        assert!(store.add("1"));
        assert!(!store.add("1"));

        assert_eq!(store.ids(), ["1".to_string()]);
        assert_eq!(storage.writes(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let storage = MemoryStorage::new();
        let mut store = FavoritesStore::load(&storage);

        assert!(!store.remove("missing"));
        assert_eq!(storage.writes(), 0);
    }

    #[test]
    fn test_remove_keeps_order_of_rest() {
        let storage = MemoryStorage::with_entry(FAVORITES_KEY, r#"["a","b","c"]"#);
        let mut store = FavoritesStore::load(&storage);

        assert!(store.remove("b"));
        assert_eq!(store.ids(), ["a".to_string(), "c".to_string()]);
        assert_eq!(storage.get(FAVORITES_KEY).as_deref(), Some(r#"["a","c"]"#));
    }

    #[test]
    fn test_toggle_returns_new_membership() {
        let storage = MemoryStorage::new();
        let mut store = FavoritesStore::load(&storage);

        assert!(store.toggle("7"));
        assert!(store.is_favorite("7"));
        assert!(!store.toggle("7"));
        assert!(!store.is_favorite("7"));
    }

    #[test]
    fn test_custom_key() {
        let storage = MemoryStorage::with_entry("other", r#"["x"]"#);
        let store = FavoritesStore::load_with_key(&storage, "other");

        assert!(store.is_favorite("x"));
        assert_eq!(store.key(), "other");
    }

    #[test]
    fn test_duplicates_in_record_are_dropped() {
        let storage = MemoryStorage::with_entry(FAVORITES_KEY, r#"["r1","r2","r1"]"#);
        let store = FavoritesStore::load(&storage);

        assert_eq!(store.ids(), ["r1".to_string(), "r2".to_string()]);
    }
}
