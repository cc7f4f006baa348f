//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the OS accessibility tree, clipboard, input event
//! stream, and config storage.

pub mod accessibility;
pub mod clipboard;
pub mod config;
pub mod hotkey;
pub mod keystroke;
pub mod notification;

// Re-export adapters
pub use clipboard::ArboardClipboard;
pub use config::XdgConfigStore;
pub use notification::{NoOpNotifier, NotifyRustNotifier};

#[cfg(target_os = "macos")]
pub use accessibility::{AxPermissionGate, MacosAccessibility};
#[cfg(not(target_os = "macos"))]
pub use accessibility::{UnsupportedAccessibility, UnsupportedPermissionGate};

#[cfg(target_os = "macos")]
pub use hotkey::DeviceQueryHotkey;

#[cfg(target_os = "macos")]
pub use keystroke::CgEventPaste;
#[cfg(not(target_os = "macos"))]
pub use keystroke::EnigoPaste;
