pub mod chat_config;
pub mod message;

pub use chat_config::{ChatConfig, DEFAULT_CHAT_MODEL, SYSTEM_INSTRUCTION};
pub use message::{ChatMessage, ChatRole};
