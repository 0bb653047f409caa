// src/modules/storage/application/ports/outgoing/key_value_storage.rs

//
// ──────────────────────────────────────────────────────────
// Scope
// ──────────────────────────────────────────────────────────
// Durable: per-origin, survives reloads (backs the content collections)
// Session: cleared when the browsing session ends (backs the admin flag)
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageScope {
    Durable,
    Session,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The backing store refused the write because it is full.
    #[error("Storage quota exceeded")]
    QuotaExceeded,

    /// The backing store cannot be used at all (privacy mode, poisoned lock).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage I/O error: {0}")]
    Io(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// String key → string value store, the shape of a browser's `localStorage`
/// and `sessionStorage`.
///
/// All calls are synchronous. Implementations use interior mutability so a
/// single instance can be shared by every component of the site.
pub trait KeyValueStorage: Send + Sync {
    fn scope(&self) -> StorageScope;

    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}
