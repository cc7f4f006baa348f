//! macOS accessibility adapter
//!
//! Talks to the AXUIElement C interface. Raw status codes and raw
//! attribute names never leave this file: statuses go through
//! [`check_status`] and names through [`AxAttribute`].

use std::ptr;

use accessibility_sys::{
    kAXTrustedCheckOptionPrompt, AXIsProcessTrusted, AXIsProcessTrustedWithOptions,
    AXUIElementCopyAttributeValue, AXUIElementCreateSystemWide, AXUIElementGetTypeID,
    AXUIElementRef, AXUIElementSetAttributeValue,
};
use core_foundation::base::{CFGetTypeID, CFRelease, CFTypeRef, TCFType};
use core_foundation::boolean::CFBoolean;
use core_foundation::dictionary::CFDictionary;
use core_foundation::string::{CFString, CFStringRef};

use crate::application::ports::{AccessibilityTree, PermissionGate};
use crate::domain::element::ElementRole;
use crate::domain::error::InsertError;

use super::attribute::AxAttribute;
use super::status::check_status;

/// Handle to the focused UI element, released when dropped.
pub struct AxElement(AXUIElementRef);

impl Drop for AxElement {
    fn drop(&mut self) {
        unsafe { CFRelease(self.0 as CFTypeRef) };
    }
}

/// Copy an attribute value off an element, translating the status code.
fn copy_attribute(element: AXUIElementRef, attribute: AxAttribute) -> Result<CFTypeRef, InsertError> {
    let name = CFString::new(attribute.as_str());
    let mut value: CFTypeRef = ptr::null();
    let status =
        unsafe { AXUIElementCopyAttributeValue(element, name.as_concrete_TypeRef(), &mut value) };
    check_status(status)?;
    // A success status with nothing behind it still has to fail.
    if value.is_null() {
        return Err(InsertError::GeneralFailure);
    }
    Ok(value)
}

/// Copy a string-valued attribute. A non-string value is a failure, not
/// a panic: some elements report unexpected types for standard names.
fn copy_string_attribute(
    element: AXUIElementRef,
    attribute: AxAttribute,
) -> Result<String, InsertError> {
    let value = copy_attribute(element, attribute)?;
    unsafe {
        if CFGetTypeID(value) != CFString::type_id() {
            CFRelease(value);
            return Err(InsertError::GeneralFailure);
        }
        let string = CFString::wrap_under_create_rule(value as CFStringRef);
        Ok(string.to_string())
    }
}

/// Accessibility tree adapter over the system-wide AXUIElement root.
pub struct MacosAccessibility;

impl MacosAccessibility {
    /// Create a new macOS accessibility adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for MacosAccessibility {
    fn default() -> Self {
        Self::new()
    }
}

impl AccessibilityTree for MacosAccessibility {
    type Element = AxElement;

    fn focused_element(&self) -> Result<AxElement, InsertError> {
        unsafe {
            let system = AXUIElementCreateSystemWide();
            if system.is_null() {
                return Err(InsertError::GeneralFailure);
            }
            let result = copy_attribute(system, AxAttribute::FocusedElement);
            CFRelease(system as CFTypeRef);

            let value = result?;
            if CFGetTypeID(value) != AXUIElementGetTypeID() {
                CFRelease(value);
                return Err(InsertError::GeneralFailure);
            }
            Ok(AxElement(value as AXUIElementRef))
        }
    }

    fn role(&self, element: &AxElement) -> Result<ElementRole, InsertError> {
        copy_string_attribute(element.0, AxAttribute::Role).map(|raw| ElementRole::from_raw(&raw))
    }

    fn value(&self, element: &AxElement) -> Result<String, InsertError> {
        copy_string_attribute(element.0, AxAttribute::Value)
    }

    fn set_selected_text(&self, element: &AxElement, text: &str) -> Result<(), InsertError> {
        let name = CFString::new(AxAttribute::SelectedText.as_str());
        let value = CFString::new(text);
        let status = unsafe {
            AXUIElementSetAttributeValue(element.0, name.as_concrete_TypeRef(), value.as_CFTypeRef())
        };
        check_status(status)
    }
}

/// Permission gate over the process trust query.
pub struct AxPermissionGate;

impl AxPermissionGate {
    /// Create a new permission gate
    pub fn new() -> Self {
        Self
    }
}

impl Default for AxPermissionGate {
    fn default() -> Self {
        Self::new()
    }
}

impl PermissionGate for AxPermissionGate {
    fn check(&self) -> Result<(), InsertError> {
        if unsafe { AXIsProcessTrusted() } {
            Ok(())
        } else {
            Err(InsertError::PermissionNotGranted)
        }
    }

    fn request(&self) {
        let options = CFDictionary::from_CFType_pairs(&[(
            unsafe { CFString::wrap_under_get_rule(kAXTrustedCheckOptionPrompt) },
            CFBoolean::true_value(),
        )]);
        unsafe { AXIsProcessTrustedWithOptions(options.as_concrete_TypeRef()) };
    }
}
