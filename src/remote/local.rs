//! Browser-local key-value collaborator.

use std::sync::Mutex;

use mockall::automock;
use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::remote::errors::LocalStoreError;

/// Browser-local persistent key-value storage.
///
/// Non-authoritative: the core treats this purely as a cache (recently
/// viewed products, comparison set, price alerts, reviews) and never as the
/// source of truth for priced transactions.
#[automock]
pub trait LocalStore: Send + Sync {
    /// Reads the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Option<Value>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`LocalStoreError::Write`] when the store rejects the write.
    fn set_item(&self, key: &str, value: Value) -> Result<(), LocalStoreError>;

    /// Deletes the value stored under `key`. No-op if absent.
    fn remove_item(&self, key: &str);
}

/// In-memory [`LocalStore`] for headless runs and tests.
#[derive(Debug, Default)]
pub struct MemoryLocalStore {
    items: Mutex<FxHashMap<String, Value>>,
}

impl MemoryLocalStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalStore for MemoryLocalStore {
    fn get_item(&self, key: &str) -> Option<Value> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: Value) -> Result<(), LocalStoreError> {
        let mut items = self.items.lock().map_err(|_| LocalStoreError::Write {
            key: key.to_owned(),
            reason: "store lock poisoned".to_owned(),
        })?;

        items.insert(key.to_owned(), value);

        Ok(())
    }

    fn remove_item(&self, key: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.remove(key);
        }
    }
}
