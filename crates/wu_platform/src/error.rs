use thiserror::Error;

/// Error returned by display-affinity operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AffinityError {
    /// Missing or malformed argument, rejected before any platform call.
    #[error("{0}")]
    InvalidArgument(String),

    /// The OS call ran and reported failure.
    #[error("{operation} failed (0x{code:08x}): {message}")]
    Platform {
        operation: &'static str,
        code: i32,
        message: String,
    },

    /// No display-affinity facility on this platform.
    #[error("display affinity is not supported on this platform")]
    Unsupported,
}

impl AffinityError {
    pub fn invalid_handle() -> Self {
        Self::InvalidArgument("Window handle (number) expected as first argument".to_string())
    }

    pub fn platform(operation: &'static str, code: i32, message: impl Into<String>) -> Self {
        Self::Platform {
            operation,
            code,
            message: message.into(),
        }
    }

    /// Failures that reach the host as a `false` / `-1` result instead of a raised error.
    #[inline]
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Self::Platform { .. } | Self::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::AffinityError;

    #[test]
    fn invalid_argument_is_raised_not_sentinel() {
        assert!(!AffinityError::invalid_handle().is_sentinel());
        assert!(AffinityError::Unsupported.is_sentinel());
        assert!(AffinityError::platform("GetWindowDisplayAffinity", 5, "denied").is_sentinel());
    }

    #[test]
    fn platform_message_includes_hresult() {
        let err = AffinityError::platform("SetWindowDisplayAffinity", -2147024890, "Invalid handle");
        assert_eq!(
            err.to_string(),
            "SetWindowDisplayAffinity failed (0x80070006): Invalid handle"
        );
    }
}
