/// Capture-protection snapshot for one window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureState {
    /// A real backend is active.
    pub supported: bool,
    /// The window is excluded from capture.
    pub hidden: bool,
    /// Raw affinity, `-1` when unknown.
    pub affinity: i64,
    pub error: Option<String>,
}

impl CaptureState {
    pub fn unsupported() -> Self {
        Self {
            supported: false,
            hidden: false,
            affinity: crate::AFFINITY_ERROR,
            error: None,
        }
    }
}
