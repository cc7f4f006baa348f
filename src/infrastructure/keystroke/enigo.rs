//! Paste keystroke adapter using enigo
//!
//! Used where the Quartz event API is unavailable; sends Ctrl-V.

use async_trait::async_trait;

use crate::application::ports::PasteKeystroke;
use crate::domain::error::InsertError;

/// Paste keystroke adapter backed by enigo
pub struct EnigoPaste;

impl EnigoPaste {
    /// Create a new enigo paste adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnigoPaste {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasteKeystroke for EnigoPaste {
    async fn send_paste(&self) -> Result<(), InsertError> {
        // enigo operations are blocking, so run in spawn_blocking
        tokio::task::spawn_blocking(|| {
            use enigo::{Direction, Enigo, Key, Keyboard, Settings};

            let mut enigo = Enigo::new(&Settings::default()).map_err(|e| {
                InsertError::FailToCopyPaste(format!("Failed to create enigo: {}", e))
            })?;

            let chord_err =
                |e| InsertError::FailToCopyPaste(format!("Failed to send paste chord: {}", e));

            enigo.key(Key::Control, Direction::Press).map_err(chord_err)?;
            enigo
                .key(Key::Unicode('v'), Direction::Click)
                .map_err(chord_err)?;
            enigo
                .key(Key::Control, Direction::Release)
                .map_err(chord_err)
        })
        .await
        .map_err(|e| InsertError::FailToCopyPaste(format!("Task join error: {}", e)))?
    }
}
