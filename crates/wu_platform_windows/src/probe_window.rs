use wu_platform::WindowId;

use crate::{HWND, win_api, window_id};

const PROBE_CLASS_NAME: &str = "wu_affinity_probe_window";

/// Hidden tool window that is destroyed on drop.
///
/// Gives callers a real top-level window owned by this process to exercise the affinity calls
/// against.
#[derive(Debug)]
pub struct ProbeWindow {
    hwnd: HWND,
}

impl ProbeWindow {
    pub fn new() -> windows::core::Result<Self> {
        let hwnd = win_api::create_hidden_toolwindow(PROBE_CLASS_NAME, 64, 64)?;
        Ok(Self { hwnd })
    }

    pub fn window_id(&self) -> WindowId {
        window_id(self.hwnd)
    }
}

impl Drop for ProbeWindow {
    fn drop(&mut self) {
        let _ = win_api::destroy_window(self.hwnd);
    }
}

#[cfg(test)]
mod tests {
    use super::ProbeWindow;

    #[test]
    fn probe_window_has_non_null_handle() {
        let probe = ProbeWindow::new().expect("create probe window");
        assert!(probe.window_id().is_valid());
    }
}
