//! File-backed JSON store.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::warn;

use crate::{KeyValueStore, KvError};

/// Key-value store persisted as a single JSON object on disk.
///
/// Values must themselves be JSON-encoded bytes; they are stored inline in
/// the object, so the file stays inspectable by hand. Every mutation reads
/// the current file content and overwrites it, matching the storefront's
/// single-writer, last-writer-wins persistence model.
///
/// A missing file is an empty store. An unreadable or malformed file is
/// logged and treated as empty rather than surfaced as a fatal condition.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file path.
    ///
    /// The file is not created until the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Map<String, Value> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Map::new(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read store file, starting empty");
                return Map::new();
            }
        };

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(map)) => map,
            Ok(_) | Err(_) => {
                warn!(path = %self.path.display(), "store file is not a JSON object, starting empty");
                Map::new()
            }
        }
    }

    fn save(&self, map: &Map<String, Value>) -> Result<(), KvError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let bytes = serde_json::to_vec_pretty(&Value::Object(map.clone()))?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KvError> {
        let map = self.load();
        match map.get(key) {
            Some(value) => Ok(Some(serde_json::to_vec(value)?)),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), KvError> {
        let parsed: Value = serde_json::from_slice(value)?;
        let mut map = self.load();
        map.insert(key.to_string(), parsed);
        self.save(&map)
    }

    fn delete(&self, key: &str) -> Result<(), KvError> {
        let mut map = self.load();
        if map.remove(key).is_some() {
            self.save(&map)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, JsonFileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("store.json"));
        (dir, store)
    }

    #[test]
    fn test_missing_file_is_empty() {
        let (_dir, store) = temp_store();
        assert!(store.get("favorites").unwrap().is_none());
    }

    #[test]
    fn test_set_get_roundtrip() {
        let (_dir, store) = temp_store();
        store.set("favorites", b"[1,7]").unwrap();
        let bytes = store.get("favorites").unwrap().unwrap();
        let ids: Vec<u32> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(ids, vec![1, 7]);
    }

    #[test]
    fn test_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let store = JsonFileStore::new(&path);
        store.set("favorites", b"[3]").unwrap();
        drop(store);

        let reopened = JsonFileStore::new(&path);
        let bytes = reopened.get("favorites").unwrap().unwrap();
        assert_eq!(bytes, b"[3]");
    }

    #[test]
    fn test_delete_removes_key() {
        let (_dir, store) = temp_store();
        store.set("favorites", b"[1]").unwrap();
        store.set("other", b"true").unwrap();
        store.delete("favorites").unwrap();

        assert!(store.get("favorites").unwrap().is_none());
        assert!(store.get("other").unwrap().is_some());
    }

    #[test]
    fn test_corrupt_file_treated_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, b"not json at all").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.get("favorites").unwrap().is_none());

        // Writing recovers the file.
        store.set("favorites", b"[]").unwrap();
        assert_eq!(store.get("favorites").unwrap().unwrap(), b"[]");
    }

    #[test]
    fn test_rejects_non_json_value() {
        let (_dir, store) = temp_store();
        assert!(store.set("favorites", b"\xff\xfe").is_err());
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("store.json");
        let store = JsonFileStore::new(&path);
        store.set("favorites", b"[]").unwrap();
        assert!(path.exists());
    }
}
