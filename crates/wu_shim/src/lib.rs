//! Host-neutral display-affinity shim.
//!
//! Validates host arguments, picks a backend once at startup and maps backend outcomes onto the
//! host conventions: invalid arguments are raised, platform failures become `false` / `-1`.

pub mod args;
pub mod logging;
pub mod runtime;
pub mod select;
pub mod shim;
pub mod state;

pub use args::HostValue;
pub use runtime::ShimRuntime;
pub use select::{native_platform, select_platform};
pub use shim::{AffinityShim, AFFINITY_ERROR};
pub use state::CaptureState;

pub use wu_settings::{BackendPreference, Settings};

pub use wu_platform::{
    AffinityError, DisplayAffinity, DisplayAffinityPlatform, UnsupportedPlatform, WDA_EXCLUDEFROMCAPTURE,
    WDA_MONITOR, WDA_NONE, WindowId,
};
