use wu_platform::{AffinityError, DisplayAffinity, WindowId};

/// A host argument, reduced to what validation needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostValue {
    /// Argument not passed (or `undefined`).
    Missing,
    Number(f64),
    /// Anything else; carries the host type name for messages.
    Other(&'static str),
}

impl From<f64> for HostValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Option<f64>> for HostValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Missing, Self::Number)
    }
}

/// Validate a window-handle argument.
pub fn window_handle(arg: HostValue) -> Result<WindowId, AffinityError> {
    match arg {
        HostValue::Number(value) => Ok(WindowId::from_host_number(value)),
        HostValue::Missing | HostValue::Other(_) => Err(AffinityError::invalid_handle()),
    }
}

/// Validate an affinity argument. Only the exact values `0`, `1` and `2` are accepted.
pub fn display_affinity(arg: HostValue) -> Result<DisplayAffinity, AffinityError> {
    let value = match arg {
        HostValue::Number(value) if value.fract() == 0.0 => value,
        HostValue::Number(value) => {
            return Err(AffinityError::InvalidArgument(format!(
                "Display affinity must be an integer, got {value}"
            )));
        }
        HostValue::Missing | HostValue::Other(_) => {
            return Err(AffinityError::InvalidArgument(
                "Display affinity (number) expected as second argument".to_string(),
            ));
        }
    };
    DisplayAffinity::try_from(value as i64)
}

/// Decode the little-endian native handle buffer a host returns for a window.
///
/// Four bytes are read as a 32-bit handle; eight or more as a 64-bit one (extra bytes ignored).
pub fn handle_from_buffer(bytes: &[u8]) -> Result<WindowId, AffinityError> {
    let raw = if let Some(wide) = bytes.first_chunk::<8>() {
        u64::from_le_bytes(*wide) as usize
    } else if let Some(narrow) = bytes.first_chunk::<4>() {
        u32::from_le_bytes(*narrow) as usize
    } else {
        return Err(AffinityError::InvalidArgument(format!(
            "Native window handle buffer must hold at least 4 bytes, got {}",
            bytes.len()
        )));
    };
    Ok(WindowId::from_raw(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_non_numeric_handles_are_rejected() {
        for arg in [
            HostValue::Missing,
            HostValue::Other("string"),
            HostValue::Other("object"),
            HostValue::Other("null"),
            HostValue::Other("boolean"),
            HostValue::Other("bigint"),
        ] {
            assert_eq!(window_handle(arg), Err(AffinityError::invalid_handle()));
        }
    }

    #[test]
    fn numeric_handle_is_accepted_even_if_null() {
        assert_eq!(window_handle(HostValue::Number(0.0)), Ok(WindowId::INVALID));
        assert_eq!(
            window_handle(HostValue::from(Some(132_456.0))),
            Ok(WindowId::from_raw(132_456))
        );
        assert_eq!(HostValue::from(None), HostValue::Missing);
    }

    #[test]
    fn affinity_argument_validation() {
        assert_eq!(
            display_affinity(HostValue::Number(2.0)),
            Ok(DisplayAffinity::ExcludeFromCapture)
        );
        assert_eq!(display_affinity(HostValue::Number(0.0)), Ok(DisplayAffinity::None));
        for bad in [
            HostValue::Number(1.5),
            HostValue::Number(3.0),
            HostValue::Number(17.0),
            HostValue::Number(-1.0),
            HostValue::Number(f64::NAN),
            HostValue::Missing,
            HostValue::Other("boolean"),
        ] {
            assert!(
                matches!(display_affinity(bad), Err(AffinityError::InvalidArgument(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn buffer_decoding() {
        assert_eq!(
            handle_from_buffer(&[0x34, 0x12, 0x0a, 0x00]),
            Ok(WindowId::from_raw(0x000a_1234))
        );
        assert_eq!(
            handle_from_buffer(&[0x34, 0x12, 0x0a, 0x00, 0, 0, 0, 0]),
            Ok(WindowId::from_raw(0x000a_1234))
        );
        // Six bytes: only the first four are meaningful.
        assert_eq!(
            handle_from_buffer(&[0x01, 0x00, 0x00, 0x00, 0xff, 0xff]),
            Ok(WindowId::from_raw(1))
        );
        // Handles above i64::MAX stay positive on the way back to the host.
        let high = handle_from_buffer(&[0xff; 8]).unwrap();
        assert!(high.to_host_number() > 0.0);
        assert!(handle_from_buffer(&[]).is_err());
        assert!(handle_from_buffer(&[1, 2, 3]).is_err());
    }
}
