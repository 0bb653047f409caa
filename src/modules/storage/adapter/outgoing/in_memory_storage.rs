use std::collections::HashMap;
use std::sync::Mutex;

use crate::modules::storage::application::ports::outgoing::{
    KeyValueStorage, StorageError, StorageScope,
};

/// Process-local implementation of `KeyValueStorage`.
///
/// Used for the session scope (the admin login flag lives only as long as the
/// host process) and as the durable scope in tests.
///
/// An optional byte quota mimics the browser limit: a `set_item` that would
/// push the total size of keys and values past the quota fails with
/// `StorageError::QuotaExceeded` and leaves the previous entry untouched.
#[derive(Debug)]
pub struct InMemoryStorage {
    scope: StorageScope,
    quota_bytes: Option<usize>,
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryStorage {
    pub fn new(scope: StorageScope) -> Self {
        Self {
            scope,
            quota_bytes: None,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn durable() -> Self {
        Self::new(StorageScope::Durable)
    }

    pub fn session() -> Self {
        Self::new(StorageScope::Session)
    }

    pub fn with_quota(mut self, quota_bytes: usize) -> Self {
        self.quota_bytes = Some(quota_bytes);
        self
    }

    /// Drop every entry, as a browser does when the session ends.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.lock()?.clear();
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|e| StorageError::Unavailable(format!("Lock poisoned: {}", e)))
    }
}

impl KeyValueStorage for InMemoryStorage {
    fn scope(&self) -> StorageScope {
        self.scope
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.lock()?;

        if let Some(quota) = self.quota_bytes {
            let used: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            if used + key.len() + value.len() > quota {
                return Err(StorageError::QuotaExceeded);
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get_returns_value() {
        let storage = InMemoryStorage::durable();

        storage.set_item("projects", "[]").unwrap();

        assert_eq!(storage.get_item("projects").unwrap(), Some("[]".to_string()));
        assert_eq!(storage.scope(), StorageScope::Durable);
    }

    #[test]
    fn test_missing_key_is_none() {
        let storage = InMemoryStorage::session();

        assert_eq!(storage.get_item("isAdminLoggedIn").unwrap(), None);
    }

    #[test]
    fn test_remove_and_clear() {
        let storage = InMemoryStorage::session();
        storage.set_item("a", "1").unwrap();
        storage.set_item("b", "2").unwrap();

        storage.remove_item("a").unwrap();
        assert_eq!(storage.get_item("a").unwrap(), None);
        assert_eq!(storage.len(), 1);

        storage.clear().unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_quota_exceeded_keeps_previous_value() {
        let storage = InMemoryStorage::durable().with_quota(16);
        storage.set_item("key", "small").unwrap();

        let err = storage
            .set_item("key", "this value is far too large")
            .unwrap_err();

        assert_eq!(err, StorageError::QuotaExceeded);
        assert_eq!(storage.get_item("key").unwrap(), Some("small".to_string()));
    }

    #[test]
    fn test_quota_counts_replaced_entry_once() {
        let storage = InMemoryStorage::durable().with_quota(10);
        storage.set_item("k", "123456789").unwrap();

        // Replacing the same key must not double count the old value.
        assert!(storage.set_item("k", "987654321").is_ok());
    }
}
