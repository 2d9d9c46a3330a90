//! Storage Abstraction
//!
//! Key-value persistence used by the favorites store.
//! The browser implementation lives in the UI crate; `MemoryStorage`
//! backs tests and native consumers.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::error::StorageError;

/// Synchronous string key-value storage
pub trait KeyValueStorage {
    /// Read the value under `key`, `Ok(None)` if nothing is stored
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value under `key`
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

/// In-process storage with a write counter
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one raw record
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.entries.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }

    /// Raw value under `key`
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Number of successful writes so far
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_reads_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read("absent").unwrap(), None);
        assert_eq!(storage.writes(), 0);
    }

    #[test]
    fn test_write_replaces_and_counts() {
        let storage = MemoryStorage::new();
        storage.write("k", "1").unwrap();
        storage.write("k", "2").unwrap();

        assert_eq!(storage.read("k").unwrap().as_deref(), Some("2"));
        assert_eq!(storage.writes(), 2);
    }

    #[test]
    fn test_borrowed_storage_shares_state() {
        let storage = MemoryStorage::new();
        let borrowed = &storage;
        borrowed.write("k", "v").unwrap();
        assert_eq!(storage.get("k").as_deref(), Some("v"));
    }
}
