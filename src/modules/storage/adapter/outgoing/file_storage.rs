use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::warn;

use crate::modules::storage::application::ports::outgoing::{
    KeyValueStorage, StorageError, StorageScope,
};

const STORAGE_FILE: &str = "storage.json";

/// File-backed implementation of `KeyValueStorage` for the durable scope.
///
/// ## Layout
/// One JSON object per profile directory:
/// ```text
/// <dir>/storage.json -> { "projects": "<json>", "blogPosts": "<json>", ... }
/// ```
/// Values are kept as opaque strings, exactly like `localStorage`.
///
/// ## Write path
/// Every `set_item`/`remove_item` rewrites the whole file through a temporary
/// sibling followed by a rename, so a reader never sees a half-written file.
/// If the rewrite fails the in-memory entry is rolled back and the error is
/// returned to the caller.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStorage {
    /// Open (or create) the storage profile in `dir`.
    ///
    /// A corrupt storage file is not fatal: the profile starts empty and the
    /// collections re-seed themselves on first read.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|e| StorageError::Io(e.to_string()))?;

        let path = dir.join(STORAGE_FILE);
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Ignoring unreadable storage file {:?}: {}", path, e);
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(StorageError::Io(e.to_string())),
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|e| StorageError::Unavailable(format!("Lock poisoned: {}", e)))
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError::Io(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw).map_err(|e| StorageError::Io(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| StorageError::Io(e.to_string()))
    }
}

impl KeyValueStorage for FileStorage {
    fn scope(&self) -> StorageScope {
        StorageScope::Durable
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.lock()?;
        let previous = entries.insert(key.to_string(), value.to_string());

        if let Err(e) = self.flush(&entries) {
            match previous {
                Some(old) => entries.insert(key.to_string(), old),
                None => entries.remove(key),
            };
            return Err(e);
        }

        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.lock()?;
        let Some(previous) = entries.remove(key) else {
            return Ok(());
        };

        if let Err(e) = self.flush(&entries) {
            entries.insert(key.to_string(), previous);
            return Err(e);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_profile() -> PathBuf {
        std::env::temp_dir().join(format!("portfolio-site-test-{}", Uuid::new_v4()))
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = temp_profile();

        let storage = FileStorage::open(&dir).unwrap();
        storage.set_item("theme", "\"dark\"").unwrap();
        drop(storage);

        let reopened = FileStorage::open(&dir).unwrap();
        assert_eq!(
            reopened.get_item("theme").unwrap(),
            Some("\"dark\"".to_string())
        );

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_remove_item_is_persisted() {
        let dir = temp_profile();

        let storage = FileStorage::open(&dir).unwrap();
        storage.set_item("projects", "[]").unwrap();
        storage.remove_item("projects").unwrap();
        drop(storage);

        let reopened = FileStorage::open(&dir).unwrap();
        assert_eq!(reopened.get_item("projects").unwrap(), None);

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_corrupt_file_opens_empty() {
        let dir = temp_profile();
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(STORAGE_FILE), "{ not json").unwrap();

        let storage = FileStorage::open(&dir).unwrap();

        assert_eq!(storage.get_item("projects").unwrap(), None);
        assert_eq!(storage.scope(), StorageScope::Durable);

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_failed_flush_rolls_back_entry() {
        let dir = temp_profile();
        let storage = FileStorage::open(&dir).unwrap();
        storage.set_item("projects", "[1]").unwrap();

        // Removing the profile directory makes the next flush fail.
        fs::remove_dir_all(&dir).unwrap();

        let err = storage.set_item("projects", "[2]").unwrap_err();
        assert!(matches!(err, StorageError::Io(_)));
        assert_eq!(storage.get_item("projects").unwrap(), Some("[1]".to_string()));
    }
}
