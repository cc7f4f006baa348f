//! Application layer - Use cases and port interfaces
//!
//! Contains the insertion strategies, the coordinating use case, and
//! trait definitions for external system interactions.

pub mod accessibility;
pub mod insert;
pub mod paste;
pub mod permission_watch;
pub mod ports;

// Re-export use cases and strategies
pub use accessibility::AccessibilityInsertion;
pub use insert::{InsertMethod, InsertOutput, InsertTextUseCase};
pub use paste::PasteInsertion;
pub use permission_watch::PermissionMonitor;
