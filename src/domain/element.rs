//! Focused-element classification

use std::fmt;

/// Raw role reported for a single-line text field.
pub const ROLE_TEXT_FIELD: &str = "AXTextField";

/// Raw role reported for a multi-line text area.
pub const ROLE_TEXT_AREA: &str = "AXTextArea";

/// Classification of the UI element that currently holds keyboard focus.
///
/// Only the two plain text roles take part in direct insertion. Combo
/// boxes and similar controls accept the selected-text write without an
/// error yet either ignore it or replace their entire value, so they are
/// rejected up front rather than attempted and rolled back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementRole {
    TextField,
    TextArea,
    Other(String),
}

impl ElementRole {
    /// Classify a raw role string as reported by the OS.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            ROLE_TEXT_FIELD => Self::TextField,
            ROLE_TEXT_AREA => Self::TextArea,
            other => Self::Other(other.to_string()),
        }
    }

    /// Whether direct insertion is allowed for this role.
    pub fn accepts_insertion(&self) -> bool {
        matches!(self, Self::TextField | Self::TextArea)
    }

    /// The raw role string.
    pub fn as_raw(&self) -> &str {
        match self {
            Self::TextField => ROLE_TEXT_FIELD,
            Self::TextArea => ROLE_TEXT_AREA,
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for ElementRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_raw())
    }
}
