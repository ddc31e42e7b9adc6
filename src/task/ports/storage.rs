//! Key-value slot port backing task list persistence.

use std::sync::Arc;
use thiserror::Error;

/// Result type for key-value store operations.
pub type KeyValueStoreResult<T> = Result<T, KeyValueStoreError>;

/// Named string slots in a local store.
///
/// A missing key is not an error: [`KeyValueStore::get`] returns `None`.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError`] when the key is invalid for the backing
    /// store or the read fails.
    fn get(&self, key: &str) -> KeyValueStoreResult<Option<String>>;

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError`] when the key is invalid for the backing
    /// store or the write fails.
    fn set(&self, key: &str, value: &str) -> KeyValueStoreResult<()>;
}

/// Errors returned by key-value store implementations.
#[derive(Debug, Clone, Error)]
pub enum KeyValueStoreError {
    /// The key cannot be represented by the backing store.
    #[error("invalid storage key: '{0}'")]
    InvalidKey(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl KeyValueStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
