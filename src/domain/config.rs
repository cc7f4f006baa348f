//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::chord::HotkeyChord;
use crate::domain::error::ChordParseError;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Text inserted by listen mode on each hot-key press.
    pub snippet: Option<String>,
    /// Delay before a one-shot insertion, in milliseconds.
    pub delay_ms: Option<u64>,
    /// Whether to fall back to clipboard-and-paste when direct insertion fails.
    pub fallback: Option<bool>,
    /// Whether to show desktop notifications.
    pub notify: Option<bool>,
    /// Hot-key chord for listen mode, e.g. "shift+cmd+space".
    pub hotkey: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            snippet: None,
            delay_ms: Some(0),
            fallback: Some(true),
            notify: Some(false),
            hotkey: Some(HotkeyChord::default_chord().to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            snippet: other.snippet.or(self.snippet),
            delay_ms: other.delay_ms.or(self.delay_ms),
            fallback: other.fallback.or(self.fallback),
            notify: other.notify.or(self.notify),
            hotkey: other.hotkey.or(self.hotkey),
        }
    }

    /// Get the insertion delay, or 0 if not set
    pub fn delay_ms_or_default(&self) -> u64 {
        self.delay_ms.unwrap_or(0)
    }

    /// Get the fallback setting, or true if not set
    pub fn fallback_or_default(&self) -> bool {
        self.fallback.unwrap_or(true)
    }

    /// Get the notify setting, or false if not set
    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(false)
    }

    /// Parse the configured hot-key, or the default chord if not set
    pub fn hotkey_chord(&self) -> Result<HotkeyChord, ChordParseError> {
        match self.hotkey.as_deref() {
            Some(raw) => raw.parse(),
            None => Ok(HotkeyChord::default_chord()),
        }
    }
}
