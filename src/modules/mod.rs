pub mod admin;
pub mod chat;
pub mod content;
pub mod preferences;
pub mod routing;
pub mod storage;
