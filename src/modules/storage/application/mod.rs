pub mod persisted_value;
pub mod ports;

pub use persisted_value::{PersistedValue, StoreError, Update};
