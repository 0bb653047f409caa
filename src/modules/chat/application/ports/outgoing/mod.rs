pub mod chat_connector;

pub use chat_connector::{ChatBackendError, ChatConnector, ChatSession, ChunkStream};
