use std::env;
use std::path::PathBuf;

use tracing::warn;

use crate::modules::chat::application::domain::{ChatConfig, DEFAULT_CHAT_MODEL};

pub const DEFAULT_OWNER: &str = "Tu Nombre";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
pub const DEFAULT_STORAGE_DIR: &str = ".portfolio_site";

/// Load `.env.{RUST_ENV}` (default `development`), falling back to `.env`.
pub fn load_env_files() {
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

#[derive(Clone)]
pub struct SiteConfig {
    /// Shown in the hero and in every page title.
    pub owner: String,
    pub admin_password: String,
    pub chat: ChatConfig,
    /// Directory holding the durable storage file.
    pub storage_dir: PathBuf,
}

impl SiteConfig {
    /// Read the site configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let admin_password = non_empty("ADMIN_PASSWORD").unwrap_or_else(|| {
            warn!("ADMIN_PASSWORD not set, using the default admin credential");
            DEFAULT_ADMIN_PASSWORD.to_string()
        });

        Self {
            owner: non_empty("SITE_OWNER").unwrap_or_else(|| DEFAULT_OWNER.to_string()),
            admin_password,
            chat: ChatConfig::new(
                non_empty("API_KEY"),
                non_empty("CHAT_MODEL").unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_string()),
            ),
            storage_dir: non_empty("STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_DIR)),
        }
    }
}

impl std::fmt::Debug for SiteConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteConfig")
            .field("owner", &self.owner)
            .field("admin_password", &"<redacted>")
            .field("chat", &self.chat)
            .field("storage_dir", &self.storage_dir)
            .finish()
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
