//! Hot-key infrastructure module
//!
//! The trigger chord uses the command key, so the listener only exists
//! on the platform whose accessibility model this tool targets.

#[cfg(target_os = "macos")]
mod device_query;

#[cfg(target_os = "macos")]
pub use device_query::DeviceQueryHotkey;
