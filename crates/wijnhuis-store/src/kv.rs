//! File-backed key-value store with automatic serialization.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::StoreError;

/// Type-safe key-value store backed by a directory of JSON files.
///
/// Every key maps to one file; values are serialized with `serde_json`.
/// Writes go through a temporary file followed by a rename, so a crash
/// mid-write never leaves a half-written value behind.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Open a store rooted at the given directory, creating it if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| StoreError::Open {
            path: root.display().to_string(),
            source,
        })?;
        Ok(Self { root })
    }

    /// Get a value from the store.
    ///
    /// Returns `None` if the key doesn't exist. A value that exists but
    /// fails to deserialize surfaces as `StoreError::Serialize`, so
    /// callers can decide to fall back to defaults.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let path = self.path_for(key);
        match fs::read(&path) {
            Ok(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Store a value under the given key, replacing any previous value.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(value)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, &path)?;
        debug!(key, bytes = bytes.len(), "stored value");
        Ok(())
    }

    /// Delete a value. Deleting a missing key is not an error.
    pub fn delete(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Check whether a key exists.
    pub fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.path_for(key).is_file())
    }

    /// Root directory of this store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a key to a file path, replacing characters that are not safe
    /// in file names.
    fn path_for(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(format!("{safe}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        count: u32,
    }

    fn temp_store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_set_and_get_round_trip() {
        let (_dir, store) = temp_store();
        let value = Sample {
            name: "chenin".to_string(),
            count: 3,
        };

        store.set("wijnhuis:cart", &value).unwrap();
        let loaded: Option<Sample> = store.get("wijnhuis:cart").unwrap();

        assert_eq!(loaded, Some(value));
    }

    #[test]
    fn test_get_missing_key_returns_none() {
        let (_dir, store) = temp_store();
        let loaded: Option<Sample> = store.get("nothing-here").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let (_dir, store) = temp_store();
        let first = Sample {
            name: "a".to_string(),
            count: 1,
        };
        let second = Sample {
            name: "b".to_string(),
            count: 2,
        };

        store.set("key", &first).unwrap();
        store.set("key", &second).unwrap();

        let loaded: Option<Sample> = store.get("key").unwrap();
        assert_eq!(loaded, Some(second));
    }

    #[test]
    fn test_delete_removes_value() {
        let (_dir, store) = temp_store();
        let value = Sample {
            name: "x".to_string(),
            count: 0,
        };

        store.set("key", &value).unwrap();
        assert!(store.exists("key").unwrap());

        store.delete("key").unwrap();
        assert!(!store.exists("key").unwrap());

        let loaded: Option<Sample> = store.get("key").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_delete_missing_key_is_ok() {
        let (_dir, store) = temp_store();
        assert!(store.delete("never-existed").is_ok());
    }

    #[test]
    fn test_corrupt_value_surfaces_serialize_error() {
        let (_dir, store) = temp_store();
        std::fs::write(store.root().join("broken.json"), b"{not json").unwrap();

        let result: Result<Option<Sample>, StoreError> = store.get("broken");
        assert!(matches!(result, Err(StoreError::Serialize(_))));
    }

    #[test]
    fn test_keys_with_separators_map_to_distinct_files() {
        let (_dir, store) = temp_store();
        let a = Sample {
            name: "cart".to_string(),
            count: 1,
        };
        let b = Sample {
            name: "checkout".to_string(),
            count: 2,
        };

        store.set("wijnhuis:cart", &a).unwrap();
        store.set("wijnhuis:checkout", &b).unwrap();

        let cart: Option<Sample> = store.get("wijnhuis:cart").unwrap();
        let checkout: Option<Sample> = store.get("wijnhuis:checkout").unwrap();
        assert_eq!(cart.unwrap().name, "cart");
        assert_eq!(checkout.unwrap().name, "checkout");
    }
}
