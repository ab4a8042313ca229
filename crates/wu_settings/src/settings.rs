use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

use crate::defaults::*;

/// Which display-affinity backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendPreference {
    /// Real backend where one is compiled in, stub otherwise.
    #[default]
    Auto,
    /// Ask for the real backend; falls back to the stub when none exists.
    Native,
    /// Always use the stub.
    Unsupported,
}

impl BackendPreference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Native => "native",
            Self::Unsupported => "unsupported",
        }
    }
}

impl FromStr for BackendPreference {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => Ok(Self::Auto),
            "native" | "win32" => Ok(Self::Native),
            "unsupported" | "stub" | "none" => Ok(Self::Unsupported),
            other => bail!("unknown backend preference `{other}`"),
        }
    }
}

/// Shim settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub backend: BackendPreference,
    /// `tracing_subscriber::EnvFilter` directives used when logging is enabled.
    pub log_filter: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            log_filter: None,
        }
    }
}

impl Settings {
    pub fn from_json_str(content: &str) -> anyhow::Result<Self> {
        serde_json::from_str(content).context("invalid settings JSON")
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("failed to load settings from {}", path.display()))
    }

    /// Load settings from the environment.
    ///
    /// Falls back to defaults if loading fails.
    pub fn load() -> Self {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Same as [`Settings::load`] with a custom variable lookup.
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = match lookup(CONFIG_PATH_ENV) {
            Some(path) if !path.trim().is_empty() => {
                Self::from_file(path.trim()).unwrap_or_else(|e| {
                    tracing::warn!("{e:#}; using default settings");
                    Self::default()
                })
            }
            _ => Self::default(),
        };

        if let Err(e) = settings.apply_overrides(&lookup) {
            tracing::warn!("ignoring environment override: {e:#}");
        }
        settings
    }

    /// Apply `WINDOW_UTILS_LOG` / `WINDOW_UTILS_BACKEND` on top of the current values.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<()> {
        if let Some(filter) = lookup(LOG_ENV).filter(|f| !f.trim().is_empty()) {
            self.log_filter = Some(filter.trim().to_string());
        }
        if let Some(backend) = lookup(BACKEND_ENV) {
            self.backend = backend
                .parse()
                .with_context(|| format!("{BACKEND_ENV}={backend}"))?;
        }
        Ok(())
    }

    pub fn effective_log_filter(&self) -> String {
        self.log_filter.clone().unwrap_or_else(default_log_filter)
    }
}
