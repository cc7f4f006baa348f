//! Accessibility attribute names

/// Attributes this tool reads or writes, by their raw `AX*` names.
///
/// A closed enum so the rest of the code never handles raw attribute
/// strings; conversion happens once, at the OS call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxAttribute {
    FocusedElement,
    Role,
    Value,
    SelectedText,
}

impl AxAttribute {
    /// The raw attribute name used on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FocusedElement => "AXFocusedUIElement",
            Self::Role => "AXRole",
            Self::Value => "AXValue",
            Self::SelectedText => "AXSelectedText",
        }
    }
}
