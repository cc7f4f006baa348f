//! Paste keystroke adapter using Quartz events
//!
//! Posts Command-V into the HID event stream as if the user had pressed
//! it. The virtual key code names a physical key position, so on a
//! non-QWERTY layout the posted key may not be "V".

use async_trait::async_trait;
use core_graphics::event::{CGEvent, CGEventFlags, CGEventTapLocation, CGKeyCode};
use core_graphics::event_source::{CGEventSource, CGEventSourceStateID};

use crate::application::ports::PasteKeystroke;
use crate::domain::error::InsertError;

/// Virtual key code of the key at the ANSI "V" position.
const KEY_V: CGKeyCode = 0x09;

/// Paste keystroke adapter backed by CGEvent
pub struct CgEventPaste;

impl CgEventPaste {
    /// Create a new CGEvent paste adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for CgEventPaste {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasteKeystroke for CgEventPaste {
    async fn send_paste(&self) -> Result<(), InsertError> {
        // Event posting is a blocking OS call, run it with the other
        // input adapters in spawn_blocking.
        tokio::task::spawn_blocking(|| {
            let source = CGEventSource::new(CGEventSourceStateID::HIDSystemState).map_err(|_| {
                InsertError::FailToCopyPaste("Failed to create event source".to_string())
            })?;

            let key_down = CGEvent::new_keyboard_event(source.clone(), KEY_V, true)
                .map_err(|_| {
                    InsertError::FailToCopyPaste("Failed to create key down event".to_string())
                })?;
            key_down.set_flags(CGEventFlags::CGEventFlagCommand);

            let key_up = CGEvent::new_keyboard_event(source, KEY_V, false).map_err(|_| {
                InsertError::FailToCopyPaste("Failed to create key up event".to_string())
            })?;
            key_up.set_flags(CGEventFlags::CGEventFlagCommand);

            key_down.post(CGEventTapLocation::HID);
            key_up.post(CGEventTapLocation::HID);

            Ok(())
        })
        .await
        .map_err(|e| InsertError::FailToCopyPaste(format!("Task join error: {}", e)))?
    }
}
