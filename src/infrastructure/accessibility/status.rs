//! Accessibility status codes and their error mapping

use crate::domain::error::InsertError;

/// Status of an accessibility call, as reported by the OS.
///
/// Values mirror the `AXError` constants, kept here as plain integers so
/// the mapping and its tests compile without the platform headers. A
/// code this build does not know lands in `Unknown` instead of being
/// dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxStatus {
    Success,
    Failure,
    IllegalArgument,
    InvalidUiElement,
    InvalidUiElementObserver,
    CannotComplete,
    AttributeUnsupported,
    ActionUnsupported,
    NotificationUnsupported,
    NotImplemented,
    NotificationAlreadyRegistered,
    NotificationNotRegistered,
    ApiDisabled,
    NoValue,
    ParameterizedAttributeUnsupported,
    NotEnoughPrecision,
    Unknown(i32),
}

impl AxStatus {
    /// Decode a raw `AXError` return code.
    pub fn from_raw(code: i32) -> Self {
        match code {
            0 => Self::Success,
            -25200 => Self::Failure,
            -25201 => Self::IllegalArgument,
            -25202 => Self::InvalidUiElement,
            -25203 => Self::InvalidUiElementObserver,
            -25204 => Self::CannotComplete,
            -25205 => Self::AttributeUnsupported,
            -25206 => Self::ActionUnsupported,
            -25207 => Self::NotificationUnsupported,
            -25208 => Self::NotImplemented,
            -25209 => Self::NotificationAlreadyRegistered,
            -25210 => Self::NotificationNotRegistered,
            -25211 => Self::ApiDisabled,
            -25212 => Self::NoValue,
            -25213 => Self::ParameterizedAttributeUnsupported,
            -25214 => Self::NotEnoughPrecision,
            other => Self::Unknown(other),
        }
    }

    /// Translate the status into the insertion error taxonomy.
    ///
    /// Total over every status: the observer and notification
    /// registration codes only arise from subscription plumbing this
    /// tool never calls, so they fold into the general failure together
    /// with unknown codes.
    pub fn into_result(self) -> Result<(), InsertError> {
        Err(match self {
            Self::Success => return Ok(()),
            Self::IllegalArgument => InsertError::IllegalArgument,
            Self::InvalidUiElement => InsertError::InvalidElement,
            Self::CannotComplete => InsertError::CannotComplete,
            Self::AttributeUnsupported => InsertError::AttributeUnsupported,
            Self::ActionUnsupported => InsertError::ActionUnsupported,
            Self::NotificationUnsupported => InsertError::NotificationUnsupported,
            Self::NotImplemented => InsertError::NotImplemented,
            Self::ApiDisabled => InsertError::ApiDisabled,
            Self::NoValue => InsertError::NoValue,
            Self::ParameterizedAttributeUnsupported => {
                InsertError::ParameterizedAttributeUnsupported
            }
            Self::NotEnoughPrecision => InsertError::NotEnoughPrecision,
            Self::Failure
            | Self::InvalidUiElementObserver
            | Self::NotificationAlreadyRegistered
            | Self::NotificationNotRegistered
            | Self::Unknown(_) => InsertError::GeneralFailure,
        })
    }
}

/// Shorthand for adapters translating a raw return code at the boundary.
pub fn check_status(code: i32) -> Result<(), InsertError> {
    AxStatus::from_raw(code).into_result()
}
