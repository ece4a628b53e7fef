//! # dom
//!
//! Owned element tree for hosting dropzone elements outside a browser.
//!
//! The tree carries exactly what the drag layer needs: node ids, tag names,
//! attributes in source order, and parent/child structure for event
//! bubbling. Styling, layout and parsing are out of scope.

mod attrs;
mod traverse;
mod types;

pub use attrs::{attr, first_attr, has_attr, remove_attr, set_attr};
pub use traverse::{
    assign_node_ids, collect_elements_with_attr, find_node_by_id, find_node_by_id_mut, path_to,
};
pub use types::{Attributes, Id, Node, NodeId};
