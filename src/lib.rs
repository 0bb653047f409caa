pub mod modules;
pub use modules::admin;
pub use modules::chat;
pub use modules::content;
pub use modules::preferences;
pub use modules::routing;
pub use modules::storage;

pub mod app;
pub mod config;
pub mod shared;

#[cfg(test)]
mod tests;
