//! Domain error types

use thiserror::Error;

/// Error from a text insertion attempt.
///
/// The taxonomy is flat: the four leading variants describe insertion
/// outcomes, the remainder mirror the accessibility status codes the OS
/// can return. The coordinator treats every one of them as a cue to run
/// the clipboard fallback; only a fallback failure reaches the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsertError {
    /// Accessibility authorization is missing for this process.
    #[error("Accessibility permission not granted")]
    PermissionNotGranted,

    /// The focused control's role is not an insertable text role.
    #[error("Focused element role \"{role}\" does not accept text insertion")]
    UnsettableElement { role: String },

    /// The write call reported success but the element's value did not
    /// change. Seen with rich-text and web-based editors whose internal
    /// text model bypasses the accessibility write path.
    #[error("Application accepted the write but the text did not change")]
    UnsettableApp,

    /// The clipboard rejected the text, or the paste keystroke could not
    /// be synthesized. Terminal failure of the fallback path.
    #[error("Failed to copy and paste: {0}")]
    FailToCopyPaste(String),

    #[error("Accessibility call rejected an argument")]
    IllegalArgument,

    #[error("Accessibility element is no longer valid")]
    InvalidElement,

    #[error("Accessibility request could not be completed")]
    CannotComplete,

    #[error("Attribute is not supported by the focused element")]
    AttributeUnsupported,

    #[error("Action is not supported by the focused element")]
    ActionUnsupported,

    #[error("Notification is not supported by the focused element")]
    NotificationUnsupported,

    #[error("Accessibility call is not implemented")]
    NotImplemented,

    #[error("Accessibility API is disabled system-wide")]
    ApiDisabled,

    #[error("Focused element has no value for the requested attribute")]
    NoValue,

    #[error("Parameterized attribute is not supported")]
    ParameterizedAttributeUnsupported,

    #[error("Accessibility call lacked the required precision")]
    NotEnoughPrecision,

    #[error("Accessibility call failed")]
    GeneralFailure,
}

impl InsertError {
    /// Suggestion shown alongside a terminal failure. The same generic
    /// framing is attached whichever strategy failed.
    pub const fn recovery_suggestion(&self) -> &'static str {
        match self {
            InsertError::PermissionNotGranted => {
                "Grant accessibility permission with 'typedrop permission request', \
                 otherwise a copy and paste is simulated"
            }
            _ => "A copy and paste is simulated; place the cursor in a text field and try again",
        }
    }
}

/// Error when parsing a hot-key chord string
#[derive(Debug, Clone, Error)]
#[error("Invalid hotkey: \"{input}\". Expected modifiers and a key, e.g. shift+cmd+space")]
pub struct ChordParseError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_error_messages_name_the_cause() {
        assert!(InsertError::PermissionNotGranted
            .to_string()
            .contains("permission"));
        let err = InsertError::UnsettableElement {
            role: "AXComboBox".to_string(),
        };
        assert!(err.to_string().contains("AXComboBox"));
        assert!(InsertError::UnsettableApp
            .to_string()
            .contains("did not change"));
    }

    #[test]
    fn recovery_suggestion_mentions_permission_when_missing() {
        assert!(InsertError::PermissionNotGranted
            .recovery_suggestion()
            .contains("permission"));
        assert!(InsertError::UnsettableApp
            .recovery_suggestion()
            .contains("copy and paste"));
    }
}
