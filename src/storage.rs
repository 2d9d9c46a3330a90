//! Browser Storage
//!
//! `window.localStorage` behind the core storage trait.

use recipe_core::{KeyValueStorage, StorageError};

/// Handle to the page's localStorage
///
/// Holds no JS objects, so the favorites store stays `Send + Sync` and can
/// live in a signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

impl KeyValueStorage for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::local_storage()?.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            message: format!("{:?}", e),
        })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local_storage()?.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: format!("{:?}", e),
        })
    }
}
