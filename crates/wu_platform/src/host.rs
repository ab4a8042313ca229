/// Opaque window identifier.
///
/// Wraps the numeric window handle the host hands us so platform handle types (e.g. Win32
/// `HWND`) never leak across crate boundaries. Platform backends convert to/from raw handles as
/// needed. The value is never created or destroyed here, only forwarded to the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(usize);

impl WindowId {
    pub const INVALID: WindowId = WindowId(0);

    #[inline]
    pub fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    /// Convert a host number into a window identifier.
    ///
    /// Matches how native addons read handles: truncate to `i64` (NaN becomes 0, out of range
    /// values saturate), then reinterpret the bits as a pointer-sized unsigned integer.
    #[inline]
    pub fn from_host_number(value: f64) -> Self {
        let truncated = value as i64;
        Self(truncated as usize)
    }

    #[inline]
    pub fn raw(self) -> usize {
        self.0
    }

    /// Value handed back to the host as a number.
    ///
    /// Never negative. Exact up to 2^53, which covers every Win32 handle (they fit in 32 bits).
    #[inline]
    pub fn to_host_number(self) -> f64 {
        self.0 as f64
    }

    /// Non-null check only. Whether a live window exists is up to the OS.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl From<usize> for WindowId {
    fn from(raw: usize) -> Self {
        Self::from_raw(raw)
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
