//! Direct insertion through the accessibility tree

use async_trait::async_trait;

use crate::domain::error::InsertError;

use super::ports::{AccessibilityTree, PermissionGate, TextInserter};

/// Inserts text by writing the focused element's selected-text attribute.
///
/// This is the precise strategy: the text lands at the real cursor
/// position and the result can be verified. Verification compares the
/// element's value before and after the write, because the OS reports
/// success for some applications (rich-text and web-based editors in
/// particular) whose internal text model ignores the accessibility
/// write path entirely.
///
/// Known limitation: the comparison cannot distinguish a silently
/// ignored write from one that produced text identical to what it
/// replaced, e.g. re-inserting the current selection. Both surface as
/// [`InsertError::UnsettableApp`].
pub struct AccessibilityInsertion<G, T> {
    gate: G,
    tree: T,
}

impl<G, T> AccessibilityInsertion<G, T>
where
    G: PermissionGate,
    T: AccessibilityTree,
{
    /// Create the strategy over a permission gate and an accessibility tree
    pub fn new(gate: G, tree: T) -> Self {
        Self { gate, tree }
    }

    /// Run one insertion attempt against the current focus snapshot.
    ///
    /// Short-circuits on the first failure. No retries: the causes of
    /// failure (permission, role, application behavior) are stable for
    /// as long as focus stays where it is.
    pub fn try_insert(&self, text: &str) -> Result<(), InsertError> {
        self.gate.check()?;

        // Focus changes between calls, so the element is looked up
        // fresh on every attempt and dropped when this returns.
        let element = self.tree.focused_element()?;

        let role = self.tree.role(&element)?;
        if !role.accepts_insertion() {
            return Err(InsertError::UnsettableElement {
                role: role.as_raw().to_string(),
            });
        }

        let before = self.tree.value(&element)?;
        self.tree.set_selected_text(&element, text)?;
        let after = self.tree.value(&element)?;

        // The write reporting success is not proof: an unchanged value
        // means the application swallowed it.
        if after == before {
            return Err(InsertError::UnsettableApp);
        }

        Ok(())
    }
}

#[async_trait]
impl<G, T> TextInserter for AccessibilityInsertion<G, T>
where
    G: PermissionGate,
    T: AccessibilityTree,
{
    async fn insert(&self, text: &str) -> Result<(), InsertError> {
        self.try_insert(text)
    }
}
