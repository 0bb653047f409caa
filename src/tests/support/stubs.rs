use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::modules::admin::application::ports::outgoing::IdGenerator;
use crate::modules::storage::adapter::outgoing::InMemoryStorage;
use crate::modules::storage::application::ports::outgoing::{
    KeyValueStorage, StorageError, StorageScope,
};

// =====================================================
// Storage
// =====================================================

/// Durable in-memory storage that counts `set_item` calls.
#[derive(Debug)]
pub struct CountingStorage {
    inner: InMemoryStorage,
    writes: AtomicUsize,
}

impl Default for CountingStorage {
    fn default() -> Self {
        Self {
            inner: InMemoryStorage::durable(),
            writes: AtomicUsize::new(0),
        }
    }
}

impl CountingStorage {
    /// Bypasses the counter.
    pub fn inner(&self) -> &InMemoryStorage {
        &self.inner
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl KeyValueStorage for CountingStorage {
    fn scope(&self) -> StorageScope {
        self.inner.scope()
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove_item(key)
    }
}

/// Storage that refuses every call, like a browser with storage disabled.
#[derive(Debug, Clone, Copy)]
pub struct UnavailableStorage;

impl KeyValueStorage for UnavailableStorage {
    fn scope(&self) -> StorageScope {
        StorageScope::Session
    }

    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("storage disabled".into()))
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("storage disabled".into()))
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("storage disabled".into()))
    }
}

/// Durable storage that starts rejecting writes once `fill` is called.
#[derive(Debug)]
pub struct QuotaStorage {
    inner: InMemoryStorage,
    full: AtomicBool,
}

impl Default for QuotaStorage {
    fn default() -> Self {
        Self {
            inner: InMemoryStorage::durable(),
            full: AtomicBool::new(false),
        }
    }
}

impl QuotaStorage {
    pub fn fill(&self) {
        self.full.store(true, Ordering::SeqCst);
    }
}

impl KeyValueStorage for QuotaStorage {
    fn scope(&self) -> StorageScope {
        StorageScope::Durable
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.full.load(Ordering::SeqCst) {
            return Err(StorageError::QuotaExceeded);
        }
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove_item(key)
    }
}

// =====================================================
// Ids
// =====================================================

/// Yields `id-1`, `id-2`, ...
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicUsize,
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        format!("id-{}", self.next.fetch_add(1, Ordering::SeqCst) + 1)
    }
}
