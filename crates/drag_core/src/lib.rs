//! # drag_core
//!
//! Drag-and-drop event layer that gives `dropzone` attributes their
//! behavior on an element tree.
//!
//! - [`DropzoneRegistry`] installs handlers on dropzone elements (exactly
//!   once per element) and dispatches [`DragEvent`]s through them
//! - [`on_drag_enter`] / [`on_drag_over`] are the per-element handlers
//! - [`DataTransfer`] holds the dragged data and projects it into the
//!   payload shape a given platform exposes ([`PayloadExposure`])
//!
//! Matching itself lives in the `dropzone` crate; this crate only reads
//! attributes, builds payloads and applies the outcome to the event.
//!
//! ```
//! use dom::{Id, Node};
//! use drag_core::{DataTransfer, DragEvent, DragEventKind, DropEffect, DropzoneRegistry, PayloadExposure};
//!
//! let mut page = Node::document(vec![Node::element(
//!     "div",
//!     vec![("dropzone".into(), Some("move string:text/uri-list".into()))],
//!     Vec::new(),
//! )]);
//!
//! let mut registry = DropzoneRegistry::default();
//! assert_eq!(registry.install_on_subtree(&mut page), 1);
//!
//! let mut data = DataTransfer::new(PayloadExposure::Itemized);
//! data.set_data("text/uri-list", "https://example.com/");
//!
//! let target: Id = page.children()[0].id();
//! let mut event = DragEvent::new(DragEventKind::Over, target, data);
//! let outcome = registry.dispatch(&page, &mut event).unwrap();
//!
//! assert_eq!(outcome.accepted_by, Some(target));
//! assert!(event.default_prevented());
//! assert_eq!(event.data_transfer().drop_effect(), DropEffect::Move);
//! ```

mod adapter;
mod config;
mod error;
mod event;
mod registry;
mod transfer;

pub use adapter::{DragEnterOutcome, DragOverOutcome, dropzone_text, on_drag_enter, on_drag_over};
pub use config::{
    DROPZONE_ATTRIBUTE, DropzoneConfig, INSTALLED_MARKER_ATTRIBUTE, WEBKIT_DROPZONE_ATTRIBUTE,
};
pub use error::DispatchError;
pub use event::{DragEvent, DragEventKind};
pub use registry::{DispatchOutcome, DropzoneRegistry};
pub use transfer::{DataTransfer, DropEffect, PayloadExposure};
