pub mod affinity;
pub mod error;
pub mod host;
pub mod platform_api;
pub mod unsupported;

pub use affinity::*;
pub use error::*;
pub use host::*;
pub use platform_api::*;
pub use unsupported::*;
