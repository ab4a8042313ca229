use wu_platform::{AffinityError, DisplayAffinity, DisplayAffinityPlatform, WindowId};
use wu_settings::Settings;

use crate::args::{self, HostValue};
use crate::{CaptureState, select_platform};

/// Host-facing result of a failed affinity query.
pub const AFFINITY_ERROR: i64 = -1;

/// Display-affinity shim over a single backend.
///
/// The typed core ([`AffinityShim::apply`], [`AffinityShim::query`]) reports every failure
/// through `Result`. The host-facing methods keep only invalid arguments in the error channel and
/// turn platform failures (and the unsupported stub) into `false` / [`AFFINITY_ERROR`].
pub struct AffinityShim<P = Box<dyn DisplayAffinityPlatform>> {
    platform: P,
}

impl AffinityShim {
    /// Backend chosen from `settings.backend`.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(select_platform(settings.backend))
    }

    /// Backend chosen from the environment.
    pub fn from_env() -> Self {
        Self::from_settings(&Settings::load())
    }
}

impl<P: DisplayAffinityPlatform> AffinityShim<P> {
    pub fn new(platform: P) -> Self {
        Self { platform }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn backend_name(&self) -> &'static str {
        self.platform.name()
    }

    pub fn is_supported(&self) -> bool {
        self.platform.is_supported()
    }

    /// Request `affinity` for `window`.
    pub fn apply(&self, window: WindowId, affinity: DisplayAffinity) -> Result<(), AffinityError> {
        let result = self.platform.set_display_affinity(window, affinity);
        match &result {
            Ok(()) => tracing::debug!(
                window = %window,
                affinity = %affinity,
                backend = self.platform.name(),
                "display affinity set"
            ),
            Err(e) => self.log_failure(window, "set", e),
        }
        result
    }

    /// Current affinity of `window`.
    pub fn query(&self, window: WindowId) -> Result<u32, AffinityError> {
        let result = self.platform.display_affinity(window);
        match &result {
            Ok(affinity) => tracing::debug!(
                window = %window,
                affinity,
                backend = self.platform.name(),
                "display affinity queried"
            ),
            Err(e) => self.log_failure(window, "get", e),
        }
        result
    }

    fn log_failure(&self, window: WindowId, action: &str, error: &AffinityError) {
        match error {
            AffinityError::Unsupported => tracing::debug!(
                window = %window,
                action,
                backend = self.platform.name(),
                "display affinity unavailable"
            ),
            _ => tracing::warn!(
                window = %window,
                action,
                backend = self.platform.name(),
                "display affinity call failed: {error}"
            ),
        }
    }

    /// Hide the window from screen/video capture.
    pub fn set_exclude_from_capture(&self, handle: HostValue) -> Result<bool, AffinityError> {
        let window = args::window_handle(handle)?;
        to_success_flag(self.apply(window, DisplayAffinity::ExcludeFromCapture))
    }

    /// Make the window capturable again.
    pub fn reset_affinity(&self, handle: HostValue) -> Result<bool, AffinityError> {
        let window = args::window_handle(handle)?;
        to_success_flag(self.apply(window, DisplayAffinity::None))
    }

    /// Current affinity as a non-negative integer, or [`AFFINITY_ERROR`].
    pub fn get_affinity(&self, handle: HostValue) -> Result<i64, AffinityError> {
        let window = args::window_handle(handle)?;
        match self.query(window) {
            Ok(affinity) => Ok(i64::from(affinity)),
            Err(e) if e.is_sentinel() => Ok(AFFINITY_ERROR),
            Err(e) => Err(e),
        }
    }

    /// Generic setter; `affinity` must be `0`, `1` or `2`.
    pub fn set_window_display_affinity(
        &self,
        handle: HostValue,
        affinity: HostValue,
    ) -> Result<bool, AffinityError> {
        let window = args::window_handle(handle)?;
        let affinity = args::display_affinity(affinity)?;
        to_success_flag(self.apply(window, affinity))
    }

    /// Protection snapshot for `handle`.
    pub fn capture_state(&self, handle: HostValue) -> Result<CaptureState, AffinityError> {
        let window = args::window_handle(handle)?;
        if !self.is_supported() {
            return Ok(CaptureState::unsupported());
        }

        Ok(match self.query(window) {
            Ok(affinity) => CaptureState {
                supported: true,
                hidden: DisplayAffinity::from_raw(affinity)
                    .is_some_and(DisplayAffinity::hides_from_capture),
                affinity: i64::from(affinity),
                error: None,
            },
            Err(e) => CaptureState {
                supported: true,
                hidden: false,
                affinity: AFFINITY_ERROR,
                error: Some(e.to_string()),
            },
        })
    }
}

fn to_success_flag(result: Result<(), AffinityError>) -> Result<bool, AffinityError> {
    match result {
        Ok(()) => Ok(true),
        Err(e) if e.is_sentinel() => Ok(false),
        Err(e) => Err(e),
    }
}
