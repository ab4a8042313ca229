use crate::{AffinityError, DisplayAffinity, DisplayAffinityPlatform, WindowId};

/// Stub backend for platforms without a display-affinity facility.
///
/// Every call fails with [`AffinityError::Unsupported`] regardless of the handle.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedPlatform;

impl UnsupportedPlatform {
    pub const NAME: &'static str = "unsupported";

    pub fn new() -> Self {
        Self
    }
}

impl DisplayAffinityPlatform for UnsupportedPlatform {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn is_supported(&self) -> bool {
        false
    }

    fn set_display_affinity(
        &self,
        _window: WindowId,
        _affinity: DisplayAffinity,
    ) -> Result<(), AffinityError> {
        Err(AffinityError::Unsupported)
    }

    fn display_affinity(&self, _window: WindowId) -> Result<u32, AffinityError> {
        Err(AffinityError::Unsupported)
    }
}
