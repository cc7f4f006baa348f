//! Clipboard port interface

use async_trait::async_trait;

use crate::domain::error::InsertError;

/// Port for the system clipboard
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Clear the clipboard and set its contents to `text` as plain text.
    ///
    /// The text is left on the clipboard afterwards; restoring previous
    /// contents would race the asynchronous paste delivery in the
    /// target application.
    ///
    /// # Returns
    /// Ok(()) on success, `FailToCopyPaste` otherwise
    async fn set_text(&self, text: &str) -> Result<(), InsertError>;
}
