//! Paste keystroke port interface

use async_trait::async_trait;

use crate::domain::error::InsertError;

/// Port for synthesizing the paste shortcut
#[async_trait]
pub trait PasteKeystroke: Send + Sync {
    /// Post the platform paste chord into the global input event stream,
    /// as if the user had pressed it.
    ///
    /// Fire-and-forget: there is no way to observe whether the focused
    /// application actually pasted.
    async fn send_paste(&self) -> Result<(), InsertError>;
}
