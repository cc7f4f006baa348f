//! Stand-ins for platforms without a supported accessibility model
//!
//! The insertion use case still runs, fallback-only: the gate reports
//! the API as not implemented, so the accessibility strategy fails
//! before touching any element and the coordinator goes straight to
//! clipboard-and-paste.

use crate::application::ports::{AccessibilityTree, PermissionGate};
use crate::domain::element::ElementRole;
use crate::domain::error::InsertError;

/// Permission gate that always reports the API as unavailable.
pub struct UnsupportedPermissionGate;

impl UnsupportedPermissionGate {
    /// Create a new stand-in gate
    pub fn new() -> Self {
        Self
    }
}

impl Default for UnsupportedPermissionGate {
    fn default() -> Self {
        Self::new()
    }
}

impl PermissionGate for UnsupportedPermissionGate {
    fn check(&self) -> Result<(), InsertError> {
        Err(InsertError::NotImplemented)
    }

    fn request(&self) {}
}

/// Accessibility tree that has no elements to offer.
pub struct UnsupportedAccessibility;

impl UnsupportedAccessibility {
    /// Create a new stand-in tree
    pub fn new() -> Self {
        Self
    }
}

impl Default for UnsupportedAccessibility {
    fn default() -> Self {
        Self::new()
    }
}

impl AccessibilityTree for UnsupportedAccessibility {
    type Element = ();

    fn focused_element(&self) -> Result<(), InsertError> {
        Err(InsertError::NotImplemented)
    }

    fn role(&self, _element: &()) -> Result<ElementRole, InsertError> {
        Err(InsertError::NotImplemented)
    }

    fn value(&self, _element: &()) -> Result<String, InsertError> {
        Err(InsertError::NotImplemented)
    }

    fn set_selected_text(&self, _element: &(), _text: &str) -> Result<(), InsertError> {
        Err(InsertError::NotImplemented)
    }
}
