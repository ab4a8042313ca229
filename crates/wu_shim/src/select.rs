use wu_platform::{DisplayAffinityPlatform, UnsupportedPlatform};
use wu_settings::BackendPreference;

/// The real backend for the compile target, if there is one.
#[cfg(target_os = "windows")]
pub fn native_platform() -> Option<Box<dyn DisplayAffinityPlatform>> {
    Some(Box::new(wu_platform_windows::WindowsAffinityPlatform::new()))
}

/// The real backend for the compile target, if there is one.
#[cfg(not(target_os = "windows"))]
pub fn native_platform() -> Option<Box<dyn DisplayAffinityPlatform>> {
    None
}

/// Pick the backend for a preference. Called once at startup.
pub fn select_platform(preference: BackendPreference) -> Box<dyn DisplayAffinityPlatform> {
    let platform = match preference {
        BackendPreference::Unsupported => None,
        BackendPreference::Auto => native_platform(),
        BackendPreference::Native => {
            let native = native_platform();
            if native.is_none() {
                tracing::warn!(
                    target_os = std::env::consts::OS,
                    "native display-affinity backend requested but not available; using stub"
                );
            }
            native
        }
    };

    let platform = platform.unwrap_or_else(|| Box::new(UnsupportedPlatform::new()));
    tracing::debug!(
        backend = platform.name(),
        preference = preference.as_str(),
        "display-affinity backend selected"
    );
    platform
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forced_stub_is_never_supported() {
        let platform = select_platform(BackendPreference::Unsupported);
        assert_eq!(platform.name(), UnsupportedPlatform::NAME);
        assert!(!platform.is_supported());
    }

    #[test]
    fn auto_matches_compile_target() {
        let platform = select_platform(BackendPreference::Auto);
        assert_eq!(platform.is_supported(), cfg!(target_os = "windows"));
    }

    #[cfg(not(target_os = "windows"))]
    #[tracing_test::traced_test]
    #[test]
    fn native_request_falls_back_with_warning() {
        let platform = select_platform(BackendPreference::Native);
        assert!(!platform.is_supported());
        assert!(logs_contain("native display-affinity backend requested"));
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn native_request_uses_win32() {
        assert_eq!(select_platform(BackendPreference::Native).name(), "win32");
    }
}
