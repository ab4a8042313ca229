use crate::AffinityError;

/// Raw value of `WDA_NONE`.
pub const WDA_NONE: u32 = 0;
/// Raw value of `WDA_MONITOR`.
pub const WDA_MONITOR: u32 = 1;
/// Host-facing value of `WDA_EXCLUDEFROMCAPTURE`.
///
/// The SDK defines it as `0x11`; backends translate between the two.
pub const WDA_EXCLUDEFROMCAPTURE: u32 = 2;

/// Window display affinity.
///
/// Raw values are the ones exposed to the host (`0`, `1`, `2`), shared with other
/// platform-facing code in the same process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayAffinity {
    /// Normal window, visible to capture.
    #[default]
    None,
    /// Content only shows on a monitor.
    Monitor,
    /// Excluded from screen and video capture.
    ExcludeFromCapture,
}

impl DisplayAffinity {
    pub const ALL: [DisplayAffinity; 3] = [Self::None, Self::Monitor, Self::ExcludeFromCapture];

    #[inline]
    pub fn raw(self) -> u32 {
        match self {
            Self::None => WDA_NONE,
            Self::Monitor => WDA_MONITOR,
            Self::ExcludeFromCapture => WDA_EXCLUDEFROMCAPTURE,
        }
    }

    #[inline]
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            WDA_NONE => Some(Self::None),
            WDA_MONITOR => Some(Self::Monitor),
            WDA_EXCLUDEFROMCAPTURE => Some(Self::ExcludeFromCapture),
            _ => None,
        }
    }

    /// Whether a window with this affinity is hidden from capture output.
    #[inline]
    pub fn hides_from_capture(self) -> bool {
        self == Self::ExcludeFromCapture
    }
}

impl TryFrom<i64> for DisplayAffinity {
    type Error = AffinityError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .ok()
            .and_then(Self::from_raw)
            .ok_or_else(|| {
                AffinityError::InvalidArgument(format!(
                    "Display affinity must be one of {WDA_NONE}, {WDA_MONITOR} or {WDA_EXCLUDEFROMCAPTURE}, got {value}"
                ))
            })
    }
}

impl std::fmt::Display for DisplayAffinity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::None => "WDA_NONE",
            Self::Monitor => "WDA_MONITOR",
            Self::ExcludeFromCapture => "WDA_EXCLUDEFROMCAPTURE",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values_match_win32() {
        assert_eq!(DisplayAffinity::None.raw(), 0);
        assert_eq!(DisplayAffinity::Monitor.raw(), 1);
        assert_eq!(DisplayAffinity::ExcludeFromCapture.raw(), 2);
    }

    #[test]
    fn from_raw_rejects_unknown() {
        for affinity in DisplayAffinity::ALL {
            assert_eq!(DisplayAffinity::from_raw(affinity.raw()), Some(affinity));
        }
        // SDK value of WDA_EXCLUDEFROMCAPTURE; only the backend understands it.
        assert_eq!(DisplayAffinity::from_raw(0x11), None);
    }

    #[test]
    fn try_from_negative_is_invalid_argument() {
        let err = DisplayAffinity::try_from(-1).unwrap_err();
        assert!(matches!(err, AffinityError::InvalidArgument(_)));
    }

    #[test]
    fn only_exclude_hides() {
        assert!(DisplayAffinity::ExcludeFromCapture.hides_from_capture());
        assert!(!DisplayAffinity::Monitor.hides_from_capture());
        assert!(!DisplayAffinity::None.hides_from_capture());
    }
}
