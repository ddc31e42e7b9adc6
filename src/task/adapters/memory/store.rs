//! In-memory key-value store for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::ports::{KeyValueStore, KeyValueStoreError, KeyValueStoreResult};

/// Thread-safe in-memory key-value store.
///
/// Clones share the same slots, so a test can keep a handle and inspect
/// what a store wrote.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    slots: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with one pre-populated slot.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let slots = HashMap::from([(key.into(), value.into())]);
        Self {
            slots: Arc::new(RwLock::new(slots)),
        }
    }
}

fn lock_error(err: impl ToString) -> KeyValueStoreError {
    KeyValueStoreError::persistence(std::io::Error::other(err.to_string()))
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> KeyValueStoreResult<Option<String>> {
        let slots = self.slots.read().map_err(lock_error)?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> KeyValueStoreResult<()> {
        let mut slots = self.slots.write().map_err(lock_error)?;
        slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
