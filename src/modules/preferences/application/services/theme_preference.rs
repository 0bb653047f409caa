use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;

use crate::modules::preferences::application::domain::{Theme, THEME_KEY};
use crate::modules::storage::application::ports::outgoing::KeyValueStorage;
use crate::modules::storage::application::{PersistedValue, StoreError};

/// The visitor's colour scheme choice, kept in durable storage.
#[derive(Debug)]
pub struct ThemePreference {
    theme: PersistedValue<Theme>,
}

impl ThemePreference {
    /// An unknown stored value falls back to `Theme::System`.
    pub fn open(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            theme: PersistedValue::open(storage, THEME_KEY, Theme::default()),
        }
    }

    pub fn current(&self) -> Theme {
        self.theme.get()
    }

    pub fn set(&self, theme: Theme) -> Result<(), StoreError> {
        self.theme.set(theme)?;
        info!(theme = ?theme, "Theme changed");
        Ok(())
    }

    /// Advance to the next theme and return it. The choice stays in effect for
    /// this visit even when storage refuses it.
    pub fn cycle(&self) -> Result<Theme, StoreError> {
        let next = self.current().next();
        self.set(next)?;
        Ok(next)
    }

    pub fn is_dark(&self, system_prefers_dark: bool) -> bool {
        self.current().is_dark(system_prefers_dark)
    }

    /// Re-evaluate dark mode whenever the choice changes.
    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.theme.subscribe()
    }
}
