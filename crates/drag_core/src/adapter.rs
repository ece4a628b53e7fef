//! Per-element drag handlers.
//!
//! These read the dropzone attribute at event time, so edits to the
//! attribute after installation take effect on the next event.

use crate::config::DropzoneConfig;
use dom::{Node, first_attr};
use dropzone::{DragPayload, Operation, match_payload, parse};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragEnterOutcome {
    pub suppress_default: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragOverOutcome {
    pub suppress_default: bool,
    /// Set exactly when the payload matched: the attribute's operation, or
    /// the configured default.
    pub suggested_operation: Option<Operation>,
}

/// Reads the dropzone attribute, trying each configured name in order.
pub fn dropzone_text<'a>(node: &'a Node, config: &DropzoneConfig) -> Option<&'a str> {
    first_attr(node, &config.attribute_names).map(|(_, value)| value)
}

pub fn on_drag_enter(node: &Node, payload: &DragPayload, config: &DropzoneConfig) -> DragEnterOutcome {
    DragEnterOutcome {
        suppress_default: matched_operation(node, payload, config).is_some(),
    }
}

pub fn on_drag_over(node: &Node, payload: &DragPayload, config: &DropzoneConfig) -> DragOverOutcome {
    match matched_operation(node, payload, config) {
        Some(op) => DragOverOutcome {
            suppress_default: true,
            suggested_operation: Some(op.unwrap_or(config.default_operation)),
        },
        None => DragOverOutcome::default(),
    }
}

/// `Some(operation hint)` when `node`'s dropzone accepts `payload`.
fn matched_operation(
    node: &Node,
    payload: &DragPayload,
    config: &DropzoneConfig,
) -> Option<Option<Operation>> {
    // An empty attribute is treated like a missing one.
    let text = dropzone_text(node, config).filter(|text| !text.is_empty())?;
    let pattern = parse(text);
    let hit = match_payload(&pattern, payload)?;
    log::trace!(
        target: "drag_core.dispatch",
        "element {:?} accepts payload via {:?}",
        node.id(),
        hit.reason()
    );
    Some(hit.operation())
}
