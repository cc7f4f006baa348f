//! Cross-platform clipboard adapter using arboard
//!
//! Works on Windows, macOS, and Linux (X11/Wayland).

use async_trait::async_trait;

use crate::application::ports::Clipboard;
use crate::domain::error::InsertError;

/// Clipboard adapter backed by arboard
pub struct ArboardClipboard;

impl ArboardClipboard {
    /// Create a new arboard clipboard adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clipboard for ArboardClipboard {
    async fn set_text(&self, text: &str) -> Result<(), InsertError> {
        let text = text.to_owned();

        // arboard operations are blocking, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|e| InsertError::FailToCopyPaste(e.to_string()))?;

            clipboard
                .clear()
                .map_err(|e| InsertError::FailToCopyPaste(e.to_string()))?;

            clipboard
                .set_text(&text)
                .map_err(|e| InsertError::FailToCopyPaste(e.to_string()))
        })
        .await
        .map_err(|e| InsertError::FailToCopyPaste(format!("Task join error: {}", e)))?
    }
}
