use crate::{AffinityError, DisplayAffinity, WindowId};

/// Display-affinity capability.
///
/// This is the boundary between the host-facing shim and the OS. There is exactly one real
/// implementation (Win32, in `wu_platform_windows`) and one stub ([`crate::UnsupportedPlatform`]);
/// which one is used is decided once at startup.
///
/// Implementations are stateless: every call goes straight to the OS, which owns the attribute and
/// serializes changes per window.
pub trait DisplayAffinityPlatform: Send + Sync {
    /// Short backend name, e.g. `"win32"`.
    fn name(&self) -> &'static str;

    /// `true` for a backend that can actually change window affinity.
    fn is_supported(&self) -> bool;

    fn set_display_affinity(
        &self,
        window: WindowId,
        affinity: DisplayAffinity,
    ) -> Result<(), AffinityError>;

    /// Query the current affinity.
    ///
    /// Returns the host-facing raw value; values the OS reports that have no
    /// [`DisplayAffinity`] variant are passed through unchanged.
    fn display_affinity(&self, window: WindowId) -> Result<u32, AffinityError>;
}

impl<P: DisplayAffinityPlatform + ?Sized> DisplayAffinityPlatform for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn is_supported(&self) -> bool {
        (**self).is_supported()
    }

    fn set_display_affinity(
        &self,
        window: WindowId,
        affinity: DisplayAffinity,
    ) -> Result<(), AffinityError> {
        (**self).set_display_affinity(window, affinity)
    }

    fn display_affinity(&self, window: WindowId) -> Result<u32, AffinityError> {
        (**self).display_affinity(window)
    }
}
