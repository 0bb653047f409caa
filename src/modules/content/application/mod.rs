pub mod content_store;
pub mod domain;
pub mod ports;
pub mod services;

pub use content_store::ContentStore;
