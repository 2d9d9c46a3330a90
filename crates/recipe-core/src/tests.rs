//! Favorites Store Scenario Tests
//!
//! Store behavior across reloads and failing backends, using MemoryStorage
//! in place of the browser.

#[cfg(test)]
mod tests {
    use crate::{FavoritesStore, KeyValueStorage, MemoryStorage, StorageError, FAVORITES_KEY};
    use std::cell::Cell;

    /// Backend whose reads and writes always fail
    #[derive(Default)]
    struct BrokenStorage {
        write_attempts: Cell<usize>,
    }

    impl KeyValueStorage for BrokenStorage {
        fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read { key: key.to_string(), message: "quota".to_string() })
        }

        fn write(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            self.write_attempts.set(self.write_attempts.get() + 1);
            Err(StorageError::Write { key: key.to_string(), message: "quota".to_string() })
        }
    }

    fn has_duplicates(ids: &[String]) -> bool {
        ids.iter().enumerate().any(|(i, id)| ids[i + 1..].contains(id))
    }

    #[test]
    fn test_persist_then_reload() {
        let storage = MemoryStorage::new();
        {
            let mut store = FavoritesStore::load(&storage);
            store.add("r1");
            store.add("r2");
        }

        let reloaded = FavoritesStore::load(&storage);
        assert!(reloaded.is_favorite("r1"));
        assert!(reloaded.is_favorite("r2"));
        assert_eq!(reloaded.count(), 2);
    }

    #[test]
    fn test_reload_from_raw_record() {
        let storage = MemoryStorage::with_entry(FAVORITES_KEY, r#"["r1","r2"]"#);
        let store = FavoritesStore::load(&storage);

        assert!(store.is_favorite("r1"));
        assert!(store.is_favorite("r2"));
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn test_corrupt_records_load_empty() {
        let corrupt = [
            "not json",
            "{\"ids\":[\"r1\"]}",
            "[1,2,3]",
            "[\"r1\",null]",
            "\"r1\"",
            "",
        ];
        for raw in corrupt {
            let storage = MemoryStorage::with_entry(FAVORITES_KEY, raw);
            let store = FavoritesStore::load(&storage);

            assert_eq!(store.count(), 0, "record {:?}", raw);
            assert!(!store.is_favorite("r1"), "record {:?}", raw);
            assert!(!store.is_favorite("1"), "record {:?}", raw);
        }
    }

    #[test]
    fn test_corrupt_record_is_replaced_on_next_write() {
        let storage = MemoryStorage::with_entry(FAVORITES_KEY, "garbage");
        let mut store = FavoritesStore::load(&storage);
        store.add("r9");

        assert_eq!(storage.get(FAVORITES_KEY).as_deref(), Some(r#"["r9"]"#));
    }

    #[test]
    fn test_unreadable_storage_loads_empty() {
        let storage = BrokenStorage::default();
        let store = FavoritesStore::load(&storage);
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_failed_write_keeps_memory_state() {
        let storage = BrokenStorage::default();
        let mut store = FavoritesStore::load(&storage);

        assert!(store.toggle("r1"));
        assert!(store.is_favorite("r1"));
        assert_eq!(storage.write_attempts.get(), 1);
    }

    #[test]
    fn test_toggle_writes_exactly_once() {
        let storage = MemoryStorage::new();
        let mut store = FavoritesStore::load(&storage);

        store.toggle("r1");
        assert_eq!(storage.writes(), 1);
        store.toggle("r1");
        assert_eq!(storage.writes(), 2);
    }

    #[test]
    fn test_double_toggle_restores_membership() {
        let storage = MemoryStorage::with_entry(FAVORITES_KEY, r#"["r1"]"#);
        let mut store = FavoritesStore::load(&storage);

        for id in ["r1", "r2"] {
            let before = store.is_favorite(id);
            store.toggle(id);
            store.toggle(id);
            assert_eq!(store.is_favorite(id), before);
        }
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_no_duplicates_for_any_operation_sequence() {
        // Every sequence of 4 operations over {add, remove, toggle} x {a, b}
        const OPS: usize = 6;
        for mut seq in 0..OPS.pow(4) {
            let storage = MemoryStorage::new();
            let mut store = FavoritesStore::load(&storage);
            let mut trace = Vec::new();

            for _ in 0..4 {
                let op = seq % OPS;
                seq /= OPS;
                let id = if op % 2 == 0 { "a" } else { "b" };
                match op / 2 {
                    0 => { store.add(id); }
                    1 => { store.remove(id); }
                    _ => { store.toggle(id); }
                }
                trace.push(op);

                assert!(!has_duplicates(store.ids()), "ops {:?}", trace);
                let reloaded = FavoritesStore::load(&storage);
                assert_eq!(reloaded.ids(), store.ids(), "ops {:?}", trace);
            }
        }
    }
}
