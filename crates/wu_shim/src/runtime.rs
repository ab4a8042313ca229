use parking_lot::RwLock;
use wu_settings::{BackendPreference, ConfigManager, Settings};

use crate::{AffinityShim, logging};

/// Process-wide shim state: settings plus the backend picked from them.
///
/// The backend can be swapped at runtime; calls in flight keep the one they started with.
pub struct ShimRuntime {
    config: ConfigManager,
    shim: RwLock<AffinityShim>,
}

impl ShimRuntime {
    /// Settings and backend from the environment.
    pub fn load() -> Self {
        Self::with_config(ConfigManager::new())
    }

    pub fn with_config(config: ConfigManager) -> Self {
        let shim = AffinityShim::from_settings(&config.get());
        Self {
            config,
            shim: RwLock::new(shim),
        }
    }

    pub fn with_shim<T>(&self, f: impl FnOnce(&AffinityShim) -> T) -> T {
        f(&self.shim.read())
    }

    pub fn settings(&self) -> Settings {
        self.config.get()
    }

    pub fn backend_name(&self) -> &'static str {
        self.with_shim(|shim| shim.backend_name())
    }

    pub fn is_supported(&self) -> bool {
        self.with_shim(|shim| shim.is_supported())
    }

    /// Re-read settings from the environment and pick the backend again.
    pub fn reload(&self) -> &'static str {
        let settings = self.config.reload();
        self.reselect(&settings)
    }

    /// Override the backend preference for the rest of the process.
    pub fn use_backend(&self, preference: BackendPreference) -> &'static str {
        let mut settings = self.config.get();
        settings.backend = preference;
        let settings = self.config.replace(settings);
        self.reselect(&settings)
    }

    /// Filter directives for `logging::init`, see [`logging::filter_directives`].
    pub fn log_filter(&self, requested: Option<&str>) -> String {
        logging::filter_directives(requested, &self.config.get())
    }

    fn reselect(&self, settings: &Settings) -> &'static str {
        let shim = AffinityShim::from_settings(settings);
        let name = shim.backend_name();
        *self.shim.write() = shim;
        tracing::info!(
            backend = name,
            preference = settings.backend.as_str(),
            "display-affinity backend reconfigured"
        );
        name
    }
}
