//! Keystroke infrastructure module
//!
//! Synthesizes the paste chord with the platform input event API.

#[cfg(target_os = "macos")]
mod cgevent;
#[cfg(not(target_os = "macos"))]
mod enigo;

#[cfg(target_os = "macos")]
pub use cgevent::CgEventPaste;
#[cfg(not(target_os = "macos"))]
pub use enigo::EnigoPaste;
