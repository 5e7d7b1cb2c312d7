//! Key-value store abstraction and implementations.
//!
//! Every persisted record (profile, rulesets, catalogs, day plans, index)
//! lives behind the [`KvStore`] capability so the engine is testable with an
//! in-memory fake and portable to any persistence backend. The file-backed
//! implementation uses file locking and atomic renames.

use crate::{Error, Result};
use fs2::FileExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::NamedTempFile;

/// Store key namespace, carried over from the original data layout
pub mod keys {
    use chrono::NaiveDate;

    pub const DEVICE: &str = "app:device";
    pub const PROFILE: &str = "app:profile";
    pub const ACTIVE_RULESET: &str = "app:ruleset:active";
    pub const WORKOUT_CATALOG: &str = "app:catalog:workouts";
    pub const MENU_CATALOG: &str = "app:catalog:menus";
    pub const DAY_INDEX: &str = "app:index:dayplans";

    pub fn ruleset(id: &str) -> String {
        format!("app:ruleset:{}", id)
    }

    pub fn day_plan(date: NaiveDate) -> String {
        format!("app:dayplan:{}", date.format("%Y-%m-%d"))
    }
}

/// Capability interface for the shared key-value store.
///
/// `get`/`set`/`remove` operate on raw strings; the JSON helpers are the
/// boundary where persisted records are validated into typed structs.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;

    /// Read and deserialize a JSON record, `None` when the key is absent
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Serialize and write a JSON record (full overwrite)
    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        self.set(key, &serde_json::to_string(value)?)
    }
}

// ============================================================================
// In-memory store
// ============================================================================

/// In-memory store used by unit tests and dry runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| Error::Store("store mutex poisoned".into()))
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

// ============================================================================
// File-backed store
// ============================================================================

/// File-backed store: one file per key under `<data_dir>/store/`.
///
/// Writes go through a temp file in the same directory, get fsynced, and are
/// renamed over the target. Readers take shared locks, writers exclusive
/// locks on the temp file.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) the store directory under `data_dir`
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self> {
        let root = data_dir.as_ref().join("store");
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Map a namespaced key to a file path. ':' is not portable in file
    /// names, so it becomes '.'
    fn key_path(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c == ':' { '.' } else { c })
            .collect();
        self.root.join(format!("{}.json", name))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let file = File::open(&path)?;
        file.lock_shared()?;

        let mut contents = String::new();
        let mut reader = std::io::BufReader::new(&file);
        let read_result = reader.read_to_string(&mut contents);
        file.unlock()?;
        read_result?;

        Ok(Some(contents))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);
        let parent = path
            .parent()
            .ok_or_else(|| Error::Store(format!("key '{}' has no parent directory", key)))?;
        std::fs::create_dir_all(parent)?;

        let temp = NamedTempFile::new_in(parent)?;
        temp.as_file().lock_exclusive()?;

        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            writer.write_all(value.as_bytes())?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;
        temp.as_file().unlock()?;

        temp.persist(&path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Wrote key '{}' to {:?}", key, path);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            std::fs::remove_file(&path)?;
            tracing::debug!("Removed key '{}'", key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.get("app:profile").unwrap().is_none());

        store.set("app:profile", r#"{"x":1}"#).unwrap();
        assert_eq!(store.get("app:profile").unwrap().unwrap(), r#"{"x":1}"#);

        store.remove("app:profile").unwrap();
        assert!(store.get("app:profile").unwrap().is_none());
    }

    #[test]
    fn test_file_store_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(temp_dir.path()).unwrap();

        store.set("app:dayplan:2026-01-05", r#"{"date":"2026-01-05"}"#).unwrap();
        let value = store.get("app:dayplan:2026-01-05").unwrap().unwrap();
        assert_eq!(value, r#"{"date":"2026-01-05"}"#);

        store.remove("app:dayplan:2026-01-05").unwrap();
        assert!(store.get("app:dayplan:2026-01-05").unwrap().is_none());
    }

    #[test]
    fn test_file_store_overwrite_leaves_no_temp_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(temp_dir.path()).unwrap();

        store.set("app:locale", r#""es""#).unwrap();
        store.set("app:locale", r#""en""#).unwrap();
        assert_eq!(store.get("app:locale").unwrap().unwrap(), r#""en""#);

        let extras: Vec<_> = std::fs::read_dir(temp_dir.path().join("store"))
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name() != "app.locale.json")
            .collect();
        assert!(
            extras.is_empty(),
            "Expected only app.locale.json, found extras: {:?}",
            extras
        );
    }

    #[test]
    fn test_json_helpers() {
        let store = MemoryStore::new();
        store.set_json("app:ruleset:active", &"rules_v1".to_string()).unwrap();

        let id: String = store.get_json("app:ruleset:active").unwrap().unwrap();
        assert_eq!(id, "rules_v1");

        let missing: Option<String> = store.get_json("app:missing").unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_get_json_rejects_malformed_record() {
        let store = MemoryStore::new();
        store.set("app:profile", "{ not json }").unwrap();

        let result: Result<Option<crate::UserProfile>> = store.get_json("app:profile");
        assert!(result.is_err());
    }
}
