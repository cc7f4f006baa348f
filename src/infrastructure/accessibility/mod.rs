//! Accessibility infrastructure module
//!
//! The boundary to the OS accessibility interface: typed attribute
//! names, status-code translation, and the platform adapter.

mod attribute;
mod status;

#[cfg(target_os = "macos")]
mod macos;
#[cfg(not(target_os = "macos"))]
mod unsupported;

pub use attribute::AxAttribute;
pub use status::{check_status, AxStatus};

#[cfg(target_os = "macos")]
pub use macos::{AxElement, AxPermissionGate, MacosAccessibility};
#[cfg(not(target_os = "macos"))]
pub use unsupported::{UnsupportedAccessibility, UnsupportedPermissionGate};
