#![cfg(target_os = "windows")]

mod affinity_platform;
pub mod handle;
#[cfg(any(test, feature = "test-util"))]
pub mod probe_window;
pub mod win_api;

pub use affinity_platform::WindowsAffinityPlatform;
pub use handle::{hwnd, window_id};
#[cfg(any(test, feature = "test-util"))]
pub use probe_window::ProbeWindow;

pub use windows::Win32::Foundation::HWND;
