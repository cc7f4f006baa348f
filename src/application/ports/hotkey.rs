//! Hot-key listener port interface

use async_trait::async_trait;
use thiserror::Error;

/// Hot-key errors
#[derive(Debug, Clone, Error)]
pub enum HotkeyError {
    #[error("Keyboard state unavailable: {0}")]
    Unavailable(String),

    #[error("Key '{0}' cannot be used as a hot-key")]
    UnsupportedKey(char),
}

/// Port for the global hot-key trigger.
///
/// The insertion entry point makes no assumption about how it is
/// invoked; this narrow interface is the only coupling to the trigger.
#[async_trait]
pub trait HotkeyListener: Send + Sync {
    /// Resolve once the configured chord has been pressed and released.
    async fn wait_for_chord(&self) -> Result<(), HotkeyError>;
}
