pub mod key_value_storage;

pub use key_value_storage::{KeyValueStorage, StorageError, StorageScope};
