use crate::BackendPreference;

/// Path of an optional JSON settings file.
pub const CONFIG_PATH_ENV: &str = "WINDOW_UTILS_CONFIG";
/// Overrides `Settings::backend` (`auto`, `native` or `unsupported`).
pub const BACKEND_ENV: &str = "WINDOW_UTILS_BACKEND";
/// Overrides `Settings::log_filter` (an `EnvFilter` directive string).
pub const LOG_ENV: &str = "WINDOW_UTILS_LOG";

pub fn default_backend() -> BackendPreference {
    BackendPreference::Auto
}

pub fn default_log_filter() -> String {
    "info".to_string()
}
