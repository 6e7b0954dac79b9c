//! Key-value store trait and the in-memory implementation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::{de::DeserializeOwned, Serialize};

use crate::KvError;

/// A store mapping string keys to opaque byte values.
///
/// The storefront treats the store as a single-writer resource: reads and
/// writes happen synchronously on the interaction path, and the last write
/// wins. Implementations do not need locking beyond their own integrity.
pub trait KeyValueStore {
    /// Get the value for a key, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KvError>;

    /// Set the value for a key, overwriting any previous value.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), KvError>;

    /// Delete a key. Deleting an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), KvError>;

    /// Get a value and deserialize it from JSON.
    ///
    /// Returns `None` if the key is absent.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, KvError> {
        match self.get(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Serialize a value to JSON and store it.
    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), KvError> {
        let bytes = serde_json::to_vec(value)?;
        self.set(key, &bytes)
    }
}

/// In-memory key-value store.
///
/// Clones share the same underlying map, so a test can hand one handle to a
/// consumer and inspect (or rebuild a consumer over) the other.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|m| m.len()).unwrap_or(0)
    }

    /// Check if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KvError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| KvError::StoreError("store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), KvError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| KvError::StoreError("store lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), KvError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| KvError::StoreError("store lock poisoned".to_string()))?;
        entries.remove(key);
        Ok(())
    }
}
