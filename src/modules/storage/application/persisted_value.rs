// src/modules/storage/application/persisted_value.rs

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::watch;
use tracing::{debug, error, warn};

use crate::modules::storage::application::ports::outgoing::{KeyValueStorage, StorageError};

//
// ──────────────────────────────────────────────────────────
// Update
// ──────────────────────────────────────────────────────────
// Replace(v): the new value is v
// Apply(f):   the new value is f(current), f must be pure
//

pub enum Update<T> {
    Replace(T),
    Apply(Box<dyn FnOnce(&T) -> T + Send>),
}

impl<T> Update<T> {
    pub fn apply<F>(f: F) -> Self
    where
        F: FnOnce(&T) -> T + Send + 'static,
    {
        Update::Apply(Box::new(f))
    }
}

impl<T: fmt::Debug> fmt::Debug for Update<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Update::Replace(value) => f.debug_tuple("Replace").field(value).finish(),
            Update::Apply(_) => f.write_str("Apply(<fn>)"),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The new value is live in memory but could not be written to storage.
    #[error("Could not persist '{key}': {source}")]
    StorageUnavailable {
        key: String,
        #[source]
        source: StorageError,
    },

    /// The new value could not be serialized; nothing was applied.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

//
// ──────────────────────────────────────────────────────────
// PersistedValue
// ──────────────────────────────────────────────────────────
//

/// A single piece of application state mirrored into a `KeyValueStorage` key.
///
/// The handle is the only owner of its value. Readers take snapshots with
/// [`get`](Self::get) / [`with`](Self::with) or observe every change through
/// [`subscribe`](Self::subscribe); writers go through [`write`](Self::write).
///
/// On open the stored JSON is deserialized. Absent, malformed, or unreadable
/// payloads are all replaced by the default, which is persisted right away, so a
/// broken profile heals itself on first read.
///
/// A write is applied in memory even when storage rejects it. The caller gets
/// `StoreError::StorageUnavailable` and the handle reports
/// [`has_unsaved_changes`](Self::has_unsaved_changes) until a later write
/// succeeds.
pub struct PersistedValue<T> {
    key: String,
    storage: Arc<dyn KeyValueStorage>,
    sender: watch::Sender<T>,
    unsaved: AtomicBool,
    write_lock: Mutex<()>,
}

impl<T> PersistedValue<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    pub fn open(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>, default: T) -> Self {
        let key = key.into();

        let stored = match storage.get_item(&key) {
            Ok(Some(raw)) => match serde_json::from_str::<T>(&raw) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!(key = %key, "Stored value is malformed, restoring default: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(key = %key, "Stored value could not be read, using default: {}", e);
                None
            }
        };

        let seeded = stored.is_none();
        let (sender, _) = watch::channel(stored.unwrap_or(default));

        let value = Self {
            key,
            storage,
            sender,
            unsaved: AtomicBool::new(false),
            write_lock: Mutex::new(()),
        };

        if seeded {
            debug!(key = %value.key, "Seeding storage with default value");
            let persisted = value.with(|current| value.persist(current));
            if let Err(e) = persisted {
                error!(key = %value.key, "Default value could not be persisted: {}", e);
                value.unsaved.store(true, Ordering::SeqCst);
            }
        }

        value
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.sender.borrow())
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.sender.subscribe()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved.load(Ordering::SeqCst)
    }

    pub fn write(&self, update: Update<T>) -> Result<(), StoreError> {
        match update {
            Update::Replace(value) => self.set(value),
            Update::Apply(f) => self.update(f),
        }
    }

    pub fn set(&self, value: T) -> Result<(), StoreError> {
        self.update(move |_| value)
    }

    pub fn update<F>(&self, f: F) -> Result<(), StoreError>
    where
        F: FnOnce(&T) -> T,
    {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        // The borrow must end before send_replace takes the write lock.
        let next = {
            let current = self.sender.borrow();
            f(&current)
        };

        let serialized =
            serde_json::to_string(&next).map_err(|e| StoreError::Serialization(e.to_string()))?;
        let persisted = self.storage.set_item(&self.key, &serialized);

        self.sender.send_replace(next);

        match persisted {
            Ok(()) => {
                self.unsaved.store(false, Ordering::SeqCst);
                Ok(())
            }
            Err(source) => {
                warn!(key = %self.key, "Keeping unsaved change in memory: {}", source);
                self.unsaved.store(true, Ordering::SeqCst);
                Err(StoreError::StorageUnavailable {
                    key: self.key.clone(),
                    source,
                })
            }
        }
    }

    fn persist(&self, value: &T) -> Result<(), StoreError> {
        let serialized =
            serde_json::to_string(value).map_err(|e| StoreError::Serialization(e.to_string()))?;

        self.storage
            .set_item(&self.key, &serialized)
            .map_err(|source| StoreError::StorageUnavailable {
                key: self.key.clone(),
                source,
            })
    }
}

impl<T> PersistedValue<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// Clone of the current value.
    pub fn get(&self) -> T {
        self.sender.borrow().clone()
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistedValue")
            .field("key", &self.key)
            .field("value", &*self.sender.borrow())
            .field("unsaved", &self.unsaved.load(Ordering::SeqCst))
            .finish()
    }
}
