use std::sync::Arc;

use parking_lot::RwLock;

use crate::{BackendPreference, Settings};

/// Shared, reloadable settings snapshot.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    settings: Arc<RwLock<Settings>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// Create a new config manager (loads settings once and caches them).
    pub fn new() -> Self {
        Self::with_settings(Settings::load())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings: Arc::new(RwLock::new(settings)),
        }
    }

    /// Get a snapshot copy of current settings.
    pub fn get(&self) -> Settings {
        self.settings.read().clone()
    }

    /// Reload settings from the environment and return the new snapshot.
    pub fn reload(&self) -> Settings {
        self.replace(Settings::load())
    }

    pub fn replace(&self, settings: Settings) -> Settings {
        *self.settings.write() = settings.clone();
        settings
    }

    #[inline]
    pub fn backend(&self) -> BackendPreference {
        self.settings.read().backend
    }

    #[inline]
    pub fn log_filter(&self) -> String {
        self.settings.read().effective_log_filter()
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;
    use crate::defaults::{BACKEND_ENV, CONFIG_PATH_ENV, LOG_ENV};

    #[test]
    fn clones_share_state() {
        let manager = ConfigManager::with_settings(Settings::default());
        let other = manager.clone();
        other.replace(Settings {
            backend: BackendPreference::Unsupported,
            log_filter: Some("debug".into()),
        });
        assert_eq!(manager.backend(), BackendPreference::Unsupported);
        assert_eq!(manager.log_filter(), "debug");
    }

    #[test]
    #[serial]
    fn reload_reads_environment() {
        // SAFETY: serialized with the other environment tests in this crate.
        unsafe {
            std::env::remove_var(CONFIG_PATH_ENV);
            std::env::remove_var(LOG_ENV);
            std::env::set_var(BACKEND_ENV, "unsupported");
        }
        let manager = ConfigManager::with_settings(Settings::default());
        assert_eq!(manager.backend(), BackendPreference::Auto);

        let reloaded = manager.reload();
        assert_eq!(reloaded.backend, BackendPreference::Unsupported);
        assert_eq!(manager.get(), reloaded);

        unsafe { std::env::remove_var(BACKEND_ENV) };
    }
}
