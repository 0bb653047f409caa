pub mod chat_widget;

pub use chat_widget::{ChatError, ChatWidget};
