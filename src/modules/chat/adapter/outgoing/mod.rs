pub mod offline_connector;

pub use offline_connector::OfflineConnector;
