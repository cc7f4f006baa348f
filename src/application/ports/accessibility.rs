//! Accessibility tree port interface

use crate::domain::element::ElementRole;
use crate::domain::error::InsertError;

/// Port for reading and writing the UI element that holds keyboard focus.
///
/// Element handles are request-scoped: focus is owned by the OS and can
/// move at any time, so a handle is fetched fresh for every insertion
/// attempt and discarded afterwards. Handles are not required to be
/// `Send`; a whole attempt runs on one thread.
pub trait AccessibilityTree: Send + Sync {
    /// Handle to a focused UI element, valid only for the current attempt.
    type Element;

    /// Look up the element that currently has input focus, starting from
    /// the system-wide root.
    fn focused_element(&self) -> Result<Self::Element, InsertError>;

    /// Read the element's role classification.
    fn role(&self, element: &Self::Element) -> Result<ElementRole, InsertError>;

    /// Read the element's current text value.
    fn value(&self, element: &Self::Element) -> Result<String, InsertError>;

    /// Write `text` over the element's current selection, inserting at
    /// the cursor when nothing is selected.
    ///
    /// A successful return only means the OS accepted the call. Whether
    /// the application applied it must be verified by re-reading the
    /// value; that is the caller's responsibility.
    fn set_selected_text(&self, element: &Self::Element, text: &str) -> Result<(), InsertError>;
}
