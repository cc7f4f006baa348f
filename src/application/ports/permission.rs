//! Permission gate port interface

use crate::domain::error::InsertError;

/// Port for the accessibility trust state of this process.
pub trait PermissionGate: Send + Sync {
    /// Query trust state without prompting the user.
    ///
    /// # Returns
    /// Ok(()) when the process is authorized, `PermissionNotGranted` otherwise
    fn check(&self) -> Result<(), InsertError>;

    /// Query trust state with the system prompt enabled.
    ///
    /// Fire-and-forget: denial is not an error here. The user may grant
    /// permission later from the settings dialog this opens, so this
    /// belongs behind a UI affordance, never on the insertion path.
    fn request(&self);
}
