//! Typedrop - insert text into whichever application holds keyboard focus
//!
//! This crate provides the core functionality for programmatic text
//! injection across heterogeneous UI toolkits: a direct write through
//! the accessibility tree, verified by re-reading the focused element's
//! value, with a clipboard-plus-paste-keystroke fallback for
//! applications the direct write cannot reach.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects (element roles, hot-key chords, config) and errors
//! - **Application**: Insertion strategies, the coordinating use case, and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (AXUIElement, arboard, CGEvent, etc.)
//! - **CLI**: Command-line interface, argument parsing, and the listen loop

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
