use windows::Win32::UI::WindowsAndMessaging as wm;
use wu_platform::{AffinityError, DisplayAffinity, DisplayAffinityPlatform, WindowId};

use crate::{hwnd, win_api};

const SET_OPERATION: &str = "SetWindowDisplayAffinity";
const GET_OPERATION: &str = "GetWindowDisplayAffinity";

/// Windows display-affinity backend.
///
/// Wraps `SetWindowDisplayAffinity` / `GetWindowDisplayAffinity` behind
/// `wu_platform::DisplayAffinityPlatform`. The handle must belong to a top-level window owned by
/// the calling process; anything else is rejected by the OS and reported as
/// [`AffinityError::Platform`].
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsAffinityPlatform;

impl WindowsAffinityPlatform {
    pub const NAME: &'static str = "win32";

    pub fn new() -> Self {
        Self
    }

    fn platform_err(operation: &'static str, e: windows::core::Error) -> AffinityError {
        AffinityError::platform(operation, e.code().0, e.message())
    }
}

/// Host value -> SDK value.
pub(crate) fn to_win32(affinity: DisplayAffinity) -> wm::WINDOW_DISPLAY_AFFINITY {
    match affinity {
        DisplayAffinity::None => wm::WDA_NONE,
        DisplayAffinity::Monitor => wm::WDA_MONITOR,
        DisplayAffinity::ExcludeFromCapture => wm::WDA_EXCLUDEFROMCAPTURE,
    }
}

/// SDK value -> host value. Unknown values pass through.
pub(crate) fn from_win32(raw: u32) -> u32 {
    if raw == wm::WDA_EXCLUDEFROMCAPTURE.0 {
        DisplayAffinity::ExcludeFromCapture.raw()
    } else {
        raw
    }
}

impl DisplayAffinityPlatform for WindowsAffinityPlatform {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn is_supported(&self) -> bool {
        true
    }

    fn set_display_affinity(
        &self,
        window: WindowId,
        affinity: DisplayAffinity,
    ) -> Result<(), AffinityError> {
        win_api::set_window_display_affinity(hwnd(window), to_win32(affinity))
            .map_err(|e| Self::platform_err(SET_OPERATION, e))
    }

    fn display_affinity(&self, window: WindowId) -> Result<u32, AffinityError> {
        win_api::get_window_display_affinity(hwnd(window))
            .map(from_win32)
            .map_err(|e| Self::platform_err(GET_OPERATION, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProbeWindow;

    #[test]
    fn sdk_values_map_back_to_host_values() {
        for affinity in DisplayAffinity::ALL {
            assert_eq!(from_win32(to_win32(affinity).0), affinity.raw());
        }
        assert_eq!(to_win32(DisplayAffinity::ExcludeFromCapture).0, 0x11);
    }

    #[test]
    fn unknown_sdk_value_passes_through() {
        assert_eq!(from_win32(7), 7);
    }

    #[test]
    fn null_window_is_platform_error() {
        let platform = WindowsAffinityPlatform::new();
        let err = platform.display_affinity(WindowId::INVALID).unwrap_err();
        assert!(matches!(
            err,
            AffinityError::Platform {
                operation: GET_OPERATION,
                ..
            }
        ));
        assert!(
            platform
                .set_display_affinity(WindowId::INVALID, DisplayAffinity::ExcludeFromCapture)
                .is_err()
        );
    }

    #[test]
    #[ignore = "requires an interactive desktop session with DWM composition"]
    fn exclude_then_reset_round_trip() {
        let probe = ProbeWindow::new().expect("create probe window");
        let platform = WindowsAffinityPlatform::new();
        let window = probe.window_id();

        platform
            .set_display_affinity(window, DisplayAffinity::ExcludeFromCapture)
            .unwrap();
        assert_eq!(platform.display_affinity(window), Ok(2));

        platform
            .set_display_affinity(window, DisplayAffinity::None)
            .unwrap();
        assert_eq!(platform.display_affinity(window), Ok(0));
    }
}
