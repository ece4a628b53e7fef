//! # dropzone-polyfill
//!
//! Support for the legacy `dropzone` attribute on element trees.
//!
//! The workspace splits the work into three crates, re-exported here:
//! - [`dom`]: the element tree handlers are installed on
//! - [`dropzone`]: attribute parsing and payload matching
//! - [`drag_core`]: handler installation and drag event dispatch
//!
//! Most hosts only need [`install_on_document`] followed by
//! [`DropzoneRegistry::dispatch`] for every drag-enter and drag-over.

pub use dom;
pub use drag_core;
pub use dropzone;

pub use drag_core::{
    DataTransfer, DispatchError, DispatchOutcome, DragEvent, DragEventKind, DropEffect,
    DropzoneConfig, DropzoneRegistry, PayloadExposure,
};
pub use dropzone::{AttributePattern, DragPayload, Operation, match_payload, parse};

/// Installs dropzone handlers on every matching element of `document`
/// using the default configuration, and returns the registry holding them.
pub fn install_on_document(document: &mut dom::Node) -> DropzoneRegistry {
    let mut registry = DropzoneRegistry::default();
    registry.install_on_subtree(document);
    registry
}
