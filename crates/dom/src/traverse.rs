use crate::attrs::has_attr;
use crate::{Id, Node};

/// Assigns ids in pre-order to every node whose id is still unassigned.
///
/// New ids start above the largest id already present, so calling this
/// again after appending nodes never reuses an id.
pub fn assign_node_ids(root: &mut Node) {
    fn max_id(node: &Node) -> u32 {
        node.children()
            .iter()
            .map(max_id)
            .fold(node.id().0, u32::max)
    }

    fn walk(node: &mut Node, next: &mut u32) {
        if !node.id().is_assigned() {
            node.set_id(Id(*next));
            *next = next.wrapping_add(1);
        }

        if let Some(children) = node.children_mut() {
            for c in children {
                walk(c, next);
            }
        }
    }

    let mut next = max_id(root).wrapping_add(1).max(1);
    walk(root, &mut next);
}

pub fn find_node_by_id(node: &Node, id: Id) -> Option<&Node> {
    if node.id() == id {
        return Some(node);
    }
    node.children()
        .iter()
        .find_map(|c| find_node_by_id(c, id))
}

pub fn find_node_by_id_mut(node: &mut Node, id: Id) -> Option<&mut Node> {
    if node.id() == id {
        return Some(node);
    }
    node.children_mut()?
        .iter_mut()
        .find_map(|c| find_node_by_id_mut(c, id))
}

/// Returns the nodes from `root` down to the node with `id`, inclusive.
///
/// Event dispatch walks this path in reverse to bubble from the target.
pub fn path_to(root: &Node, id: Id) -> Option<Vec<&Node>> {
    fn walk<'a>(node: &'a Node, id: Id, path: &mut Vec<&'a Node>) -> bool {
        path.push(node);
        if node.id() == id {
            return true;
        }
        for c in node.children() {
            if walk(c, id, path) {
                return true;
            }
        }
        path.pop();
        false
    }

    let mut path = Vec::new();
    walk(root, id, &mut path).then_some(path)
}

/// Collects, in document order, the ids of elements carrying `name`.
pub fn collect_elements_with_attr(node: &Node, name: &str, out: &mut Vec<Id>) {
    if has_attr(node, name) {
        out.push(node.id());
    }
    for c in node.children() {
        collect_elements_with_attr(c, name, out);
    }
}
