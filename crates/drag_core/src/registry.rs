//! Handler installation and drag event dispatch over a [`Node`] tree.

use crate::adapter::{dropzone_text, on_drag_enter, on_drag_over};
use crate::config::DropzoneConfig;
use crate::error::DispatchError;
use crate::event::{DragEvent, DragEventKind};
use crate::transfer::DropEffect;
use dom::{Id, Node, assign_node_ids, collect_elements_with_attr, find_node_by_id_mut, path_to};
use std::collections::HashSet;

/// What happened while dispatching one event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Installed elements whose handlers ran, innermost first.
    pub invoked: Vec<Id>,
    /// The element that accepted the drag, if any.
    pub accepted_by: Option<Id>,
}

/// Tracks which elements have dropzone handlers and routes events to them.
///
/// Installation is keyed by node id, so an element is wired at most once no
/// matter how often [`install_on_subtree`](Self::install_on_subtree) runs.
#[derive(Clone, Debug, Default)]
pub struct DropzoneRegistry {
    config: DropzoneConfig,
    installed: HashSet<Id>,
}

impl DropzoneRegistry {
    pub fn new(config: DropzoneConfig) -> Self {
        Self {
            config,
            installed: HashSet::new(),
        }
    }

    pub fn config(&self) -> &DropzoneConfig {
        &self.config
    }

    pub fn is_installed(&self, id: Id) -> bool {
        self.installed.contains(&id)
    }

    /// Number of elements with handlers installed.
    pub fn len(&self) -> usize {
        self.installed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.installed.is_empty()
    }

    /// Installs drag handlers on `node` if it carries a non-empty dropzone
    /// attribute and has not been wired yet.
    ///
    /// `node` must have an assigned id. Returns `true` if handlers were
    /// installed by this call.
    pub fn install_on_element(&mut self, node: &mut Node) -> bool {
        if dropzone_text(node, &self.config).is_none_or(str::is_empty) {
            return false;
        }

        let id = node.id();
        if !id.is_assigned() {
            log::debug!(target: "drag_core.install", "skipping dropzone element without an id");
            return false;
        }
        if !self.installed.insert(id) {
            return false;
        }

        if let Some(marker) = &self.config.marker_attribute {
            dom::set_attr(node, marker, "1");
        }
        log::debug!(target: "drag_core.install", "installed dropzone handlers on {id:?}");
        true
    }

    /// Installs handlers on every element under `root` carrying any of the
    /// configured attribute names. Assigns missing node ids first.
    ///
    /// Returns how many elements were newly installed.
    pub fn install_on_subtree(&mut self, root: &mut Node) -> usize {
        assign_node_ids(root);

        let mut candidates = Vec::new();
        for name in &self.config.attribute_names {
            collect_elements_with_attr(root, name, &mut candidates);
        }

        let mut installed = 0;
        for id in candidates {
            if let Some(node) = find_node_by_id_mut(root, id)
                && self.install_on_element(node)
            {
                installed += 1;
            }
        }
        installed
    }

    /// Dispatches `event` from its target up to the root, running the
    /// handlers of installed elements until one stops propagation.
    ///
    /// On drag-enter and drag-over, an accepting element prevents the
    /// default action and stops propagation; drag-over also writes the
    /// suggested operation into the event's drop effect. Other event kinds
    /// reach no dropzone handler.
    pub fn dispatch(&self, dom: &Node, event: &mut DragEvent) -> Result<DispatchOutcome, DispatchError> {
        let target = event.target();
        let path = path_to(dom, target).ok_or(DispatchError::UnknownTarget { id: target })?;
        if !path.last().is_some_and(|node| node.is_element()) {
            return Err(DispatchError::NotAnElement { id: target });
        }

        let mut outcome = DispatchOutcome::default();
        if !matches!(event.kind(), DragEventKind::Enter | DragEventKind::Over) {
            return Ok(outcome);
        }

        let payload = event.data_transfer().payload();
        for node in path.iter().rev() {
            let id = node.id();
            if !self.installed.contains(&id) {
                continue;
            }
            outcome.invoked.push(id);

            let accepted = match event.kind() {
                DragEventKind::Enter => on_drag_enter(node, &payload, &self.config).suppress_default,
                _ => {
                    let over = on_drag_over(node, &payload, &self.config);
                    if let Some(op) = over.suggested_operation {
                        event.data_transfer_mut().set_drop_effect(DropEffect::from(op));
                    }
                    over.suppress_default
                }
            };

            if accepted {
                event.prevent_default();
                event.stop_propagation();
                outcome.accepted_by = Some(id);
            }
            if event.propagation_stopped() {
                break;
            }
        }

        log::debug!(
            target: "drag_core.dispatch",
            "{} at {target:?}: invoked {:?}, accepted by {:?}",
            event.kind().as_str(),
            outcome.invoked,
            outcome.accepted_by
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests;
