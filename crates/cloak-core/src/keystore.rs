//! Named key storage.
//!
//! A `KeyStore` maps human-readable names to secrets and persists the whole
//! collection as one JSON file: read in full at load, rewritten in full on
//! every mutation. At dozens-of-records scale there is nothing to gain from
//! incremental persistence.
//!
//! A missing or unparseable store file loads as an empty store - corrupt
//! state is recovered, never fatal.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{CloakError, Result};

/// A single named key. Both fields are wiped from memory on drop.
///
/// Records are created by an explicit save, never mutated in place, and
/// removed by an explicit delete. Ordering is insertion order and carries
/// no meaning.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct KeyRecord {
    pub name: String,
    pub secret: String,
}

impl std::fmt::Debug for KeyRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyRecord")
            .field("name", &self.name)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Insertion-ordered collection of named keys backed by a JSON file.
pub struct KeyStore {
    path: PathBuf,
    records: Vec<KeyRecord>,
}

impl KeyStore {
    /// Load the store from `path`.
    ///
    /// A missing file or a payload that does not parse as a list of records
    /// (including payloads written by a future incompatible version) yields
    /// an empty store.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = fs::read_to_string(&path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default();
        Self { path, records }
    }

    /// All records, in insertion order.
    pub fn list(&self) -> &[KeyRecord] {
        &self.records
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&KeyRecord> {
        self.records.iter().find(|record| record.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a new record and rewrite the store file.
    ///
    /// # Errors
    ///
    /// - `CloakError::InvalidInput` if `name` or `secret` is empty
    /// - `CloakError::DuplicateKeyName` if `name` is already saved
    ///   (re-saving never overwrites)
    ///
    /// A failed write leaves the in-memory store unchanged.
    pub fn save(&mut self, name: &str, secret: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(CloakError::InvalidInput(
                "Key name cannot be empty".to_string(),
            ));
        }
        if secret.is_empty() {
            return Err(CloakError::InvalidInput("Key cannot be empty".to_string()));
        }
        if self.find(name).is_some() {
            return Err(CloakError::DuplicateKeyName(name.to_string()));
        }

        self.records.push(KeyRecord {
            name: name.to_string(),
            secret: secret.to_string(),
        });

        if let Err(e) = self.persist() {
            self.records.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Remove a record by name and rewrite the store file.
    ///
    /// Deleting a name that is not present is a no-op success. A failed
    /// write restores the removed record.
    pub fn delete(&mut self, name: &str) -> Result<()> {
        let removed = self
            .records
            .iter()
            .position(|record| record.name == name)
            .map(|index| (index, self.records.remove(index)));

        if let Err(e) = self.persist() {
            if let Some((index, record)) = removed {
                self.records.insert(index, record);
            }
            return Err(e);
        }
        Ok(())
    }

    /// Rewrite the whole store file via a temp file and atomic rename.
    fn persist(&self) -> Result<()> {
        let contents = serde_json::to_string_pretty(&self.records)?;

        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)?;

        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("system time: {}", e)))?
            .as_nanos();
        let temp_path = parent.join(format!(".keys-{}-{}.tmp", std::process::id(), nanos));

        fs::write(&temp_path, contents)?;
        replace_file(&temp_path, &self.path)?;
        Ok(())
    }
}

/// Rename `temp_path` over `destination`, tolerating platforms where rename
/// fails if the target exists. The temp file is removed on failure.
fn replace_file(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if fs::rename(temp_path, destination).is_err() {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|e| {
            let _ = fs::remove_file(temp_path);
            e
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> KeyStore {
        KeyStore::load(dir.path().join("keys.json"))
    }

    #[test]
    fn test_save_and_find() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);

        store.save("work", "k1").unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.find("work").unwrap().secret, "k1");
        assert!(store.find("missing").is_none());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);

        store.save("a", "k1").unwrap();
        let result = store.save("a", "k2");

        assert!(matches!(result, Err(CloakError::DuplicateKeyName(_))));
        // Original record survives, in memory and on disk
        assert_eq!(store.len(), 1);
        assert_eq!(store.find("a").unwrap().secret, "k1");

        let reloaded = store_in(&dir);
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.find("a").unwrap().secret, "k1");
    }

    #[test]
    fn test_empty_fields_rejected() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);

        assert!(matches!(
            store.save("", "k1"),
            Err(CloakError::InvalidInput(_))
        ));
        assert!(matches!(
            store.save("   ", "k1"),
            Err(CloakError::InvalidInput(_))
        ));
        assert!(matches!(
            store.save("name", ""),
            Err(CloakError::InvalidInput(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_removes_and_persists() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);

        store.save("a", "k1").unwrap();
        store.save("b", "k2").unwrap();
        store.delete("a").unwrap();

        assert!(store.find("a").is_none());
        assert_eq!(store.len(), 1);

        let reloaded = store_in(&dir);
        assert!(reloaded.find("a").is_none());
        assert_eq!(reloaded.find("b").unwrap().secret, "k2");
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);

        store.delete("missing").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_corrupt_file_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("keys.json");

        fs::write(&path, "{not json at all]").unwrap();
        assert!(KeyStore::load(&path).is_empty());

        // Parseable JSON of the wrong shape is also "corrupt"
        fs::write(&path, r#"{"version": 2, "keys": {}}"#).unwrap();
        assert!(KeyStore::load(&path).is_empty());
    }

    #[test]
    fn test_persistence_round_trip_preserves_order() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);

        store.save("c", "k3").unwrap();
        store.save("a", "k1").unwrap();
        store.save("b", "k2").unwrap();

        let reloaded = store_in(&dir);
        let names: Vec<&str> = reloaded.list().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_failed_persist_rolls_back() {
        let dir = tempdir().unwrap();
        // Parent "directory" is actually a file, so persisting must fail
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file").unwrap();

        let mut store = KeyStore::load(blocker.join("keys.json"));
        let result = store.save("a", "k1");

        assert!(result.is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_record_zeroizes() {
        let mut record = KeyRecord {
            name: "work".to_string(),
            secret: "hunter2".to_string(),
        };
        record.zeroize();

        assert!(record.name.is_empty());
        assert!(record.secret.is_empty());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let record = KeyRecord {
            name: "work".to_string(),
            secret: "hunter2".to_string(),
        };
        let debug_output = format!("{:?}", record);

        assert!(debug_output.contains("work"));
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("hunter2"));
    }
}
