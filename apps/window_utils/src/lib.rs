//! Node-API addon exposing window display affinity (screen-capture exclusion).
//!
//! Argument errors throw; platform failures and unsupported platforms return `false` / `-1`.

use std::sync::LazyLock;

use napi::bindgen_prelude::Buffer;
use napi::{Error, JsUnknown, Result, Status, ValueType};
use napi_derive::napi;
use wu_shim::{
    AffinityError, BackendPreference, CaptureState as ShimCaptureState, HostValue, ShimRuntime,
};

static RUNTIME: LazyLock<ShimRuntime> = LazyLock::new(ShimRuntime::load);

#[napi]
pub const WDA_NONE: u32 = wu_shim::WDA_NONE;

#[napi]
pub const WDA_MONITOR: u32 = wu_shim::WDA_MONITOR;

#[napi]
pub const WDA_EXCLUDEFROMCAPTURE: u32 = wu_shim::WDA_EXCLUDEFROMCAPTURE;

fn host_value(value: JsUnknown) -> Result<HostValue> {
    Ok(match value.get_type()? {
        ValueType::Undefined => HostValue::Missing,
        ValueType::Number => HostValue::Number(value.coerce_to_number()?.get_double()?),
        ValueType::Null => HostValue::Other("null"),
        ValueType::Boolean => HostValue::Other("boolean"),
        ValueType::String => HostValue::Other("string"),
        ValueType::Symbol => HostValue::Other("symbol"),
        ValueType::Object => HostValue::Other("object"),
        ValueType::Function => HostValue::Other("function"),
        _ => HostValue::Other("unknown"),
    })
}

fn to_js_error(e: AffinityError) -> Error {
    let status = match e {
        AffinityError::InvalidArgument(_) => Status::InvalidArg,
        AffinityError::Platform { .. } | AffinityError::Unsupported => Status::GenericFailure,
    };
    Error::new(status, e.to_string())
}

/// Exclude the window from screen and video capture.
#[napi]
pub fn set_exclude_from_capture(handle: JsUnknown) -> Result<bool> {
    let handle = host_value(handle)?;
    RUNTIME
        .with_shim(|shim| shim.set_exclude_from_capture(handle))
        .map_err(to_js_error)
}

/// Restore normal capture behaviour (`WDA_NONE`).
#[napi]
pub fn reset_affinity(handle: JsUnknown) -> Result<bool> {
    let handle = host_value(handle)?;
    RUNTIME
        .with_shim(|shim| shim.reset_affinity(handle))
        .map_err(to_js_error)
}

/// Current affinity, or `-1` on failure.
#[napi]
pub fn get_affinity(handle: JsUnknown) -> Result<i64> {
    let handle = host_value(handle)?;
    RUNTIME
        .with_shim(|shim| shim.get_affinity(handle))
        .map_err(to_js_error)
}

/// Set any of `WDA_NONE`, `WDA_MONITOR` or `WDA_EXCLUDEFROMCAPTURE`.
#[napi]
pub fn set_window_display_affinity(handle: JsUnknown, affinity: JsUnknown) -> Result<bool> {
    let handle = host_value(handle)?;
    let affinity = host_value(affinity)?;
    RUNTIME.with_shim(|shim| shim.set_window_display_affinity(handle, affinity))
        .map_err(to_js_error)
}

// Aliases from the legacy `window-utils` JS API.

#[napi]
pub fn hide_from_capture(handle: JsUnknown) -> Result<bool> {
    set_exclude_from_capture(handle)
}

#[napi]
pub fn show_in_capture(handle: JsUnknown) -> Result<bool> {
    reset_affinity(handle)
}

#[napi]
pub fn reset_window_display_affinity(handle: JsUnknown) -> Result<bool> {
    reset_affinity(handle)
}

#[napi]
pub fn get_display_affinity(handle: JsUnknown) -> Result<i64> {
    get_affinity(handle)
}

#[napi]
pub fn get_window_display_affinity(handle: JsUnknown) -> Result<i64> {
    get_affinity(handle)
}

#[napi(object)]
pub struct CaptureState {
    pub supported: bool,
    pub hidden: bool,
    pub affinity: i64,
    pub error: Option<String>,
}

impl From<ShimCaptureState> for CaptureState {
    fn from(state: ShimCaptureState) -> Self {
        Self {
            supported: state.supported,
            hidden: state.hidden,
            affinity: state.affinity,
            error: state.error,
        }
    }
}

#[napi]
pub fn get_capture_state(handle: JsUnknown) -> Result<CaptureState> {
    let handle = host_value(handle)?;
    RUNTIME
        .with_shim(|shim| shim.capture_state(handle))
        .map(CaptureState::from)
        .map_err(to_js_error)
}

/// Decode the buffer returned by `BrowserWindow.getNativeWindowHandle()`.
#[napi]
pub fn native_handle_from_buffer(buffer: Buffer) -> Result<f64> {
    wu_shim::args::handle_from_buffer(&buffer)
        .map(|window| window.to_host_number())
        .map_err(to_js_error)
}

#[napi]
pub fn is_supported() -> bool {
    RUNTIME.is_supported()
}

#[napi]
pub fn backend_name() -> &'static str {
    RUNTIME.backend_name()
}

/// Re-read `WINDOW_UTILS_*` settings; returns the active backend name.
#[napi]
pub fn reload_settings() -> &'static str {
    RUNTIME.reload()
}

/// Force a backend (`"auto"`, `"native"` or `"unsupported"`); returns the active backend name.
#[napi]
pub fn use_backend(preference: String) -> Result<&'static str> {
    let preference = preference
        .parse::<BackendPreference>()
        .map_err(|e: anyhow::Error| Error::new(Status::InvalidArg, format!("{e:#}")))?;
    Ok(RUNTIME.use_backend(preference))
}

/// Send `tracing` output to stderr.
///
/// `filter` defaults to the configured `log_filter`, then `info`. Returns `false` when a
/// subscriber was already installed.
#[napi]
pub fn enable_logging(filter: Option<String>) -> bool {
    let directives = RUNTIME.log_filter(filter.as_deref());
    wu_shim::logging::init(&directives)
}
