//! Attribute access on element nodes.
//!
//! Attribute names compare ASCII case-insensitively, as in HTML documents.
//! Every helper treats non-element nodes as having no attributes.

use crate::Node;

/// Returns the value of the first attribute named `name`.
///
/// A boolean attribute (present without a value) reads as `""`.
pub fn attr<'a>(node: &'a Node, name: &str) -> Option<&'a str> {
    match node {
        Node::Element { attributes, .. } => attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_deref().unwrap_or("")),
        _ => None,
    }
}

pub fn has_attr(node: &Node, name: &str) -> bool {
    match node {
        Node::Element { attributes, .. } => {
            attributes.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
        }
        _ => false,
    }
}

/// Returns the first of `names` present on `node`, together with its value.
///
/// Names are tried in the order given; later names are not consulted once
/// one is found.
pub fn first_attr<'a, 'n>(node: &'a Node, names: &'n [String]) -> Option<(&'n str, &'a str)> {
    names
        .iter()
        .find_map(|name| attr(node, name).map(|value| (name.as_str(), value)))
}

/// Sets (or replaces) an attribute value.
///
/// Returns `false` when `node` is not an element.
pub fn set_attr(node: &mut Node, name: &str, value: &str) -> bool {
    let Node::Element { attributes, .. } = node else {
        return false;
    };

    if let Some((_, v)) = attributes
        .iter_mut()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
    {
        *v = Some(value.to_string());
    } else {
        attributes.push((name.to_string(), Some(value.to_string())));
    }
    true
}

/// Removes every attribute named `name`. Returns `true` if any was removed.
pub fn remove_attr(node: &mut Node, name: &str) -> bool {
    let Node::Element { attributes, .. } = node else {
        return false;
    };
    let before = attributes.len();
    attributes.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
    attributes.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn div(attributes: Vec<(&str, Option<&str>)>) -> Node {
        Node::element(
            "div",
            attributes
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
                .collect(),
            Vec::new(),
        )
    }

    #[test]
    fn attr_is_case_insensitive_on_names() {
        let node = div(vec![("DropZone", Some("copy"))]);
        assert_eq!(attr(&node, "dropzone"), Some("copy"));
        assert!(has_attr(&node, "DROPZONE"));
    }

    #[test]
    fn boolean_attribute_reads_as_empty() {
        let node = div(vec![("dropzone", None)]);
        assert_eq!(attr(&node, "dropzone"), Some(""));
        assert!(has_attr(&node, "dropzone"));
    }

    #[test]
    fn text_nodes_have_no_attributes() {
        let mut node = Node::text("x");
        assert_eq!(attr(&node, "dropzone"), None);
        assert!(!has_attr(&node, "dropzone"));
        assert!(!set_attr(&mut node, "dropzone", "copy"));
        assert!(!remove_attr(&mut node, "dropzone"));
    }

    #[test]
    fn first_attr_follows_name_order() {
        let names = vec!["dropzone".to_string(), "webkitdropzone".to_string()];
        let both = div(vec![
            ("webkitdropzone", Some("move")),
            ("dropzone", Some("copy")),
        ]);
        assert_eq!(first_attr(&both, &names), Some(("dropzone", "copy")));

        let prefixed = div(vec![("webkitdropzone", Some("link"))]);
        assert_eq!(first_attr(&prefixed, &names), Some(("webkitdropzone", "link")));

        let none = div(Vec::new());
        assert_eq!(first_attr(&none, &names), None);
    }

    #[test]
    fn set_attr_replaces_existing_value() {
        let mut node = div(vec![("data-x", Some("1"))]);
        assert!(set_attr(&mut node, "data-x", "2"));
        assert!(set_attr(&mut node, "data-y", "3"));
        assert_eq!(attr(&node, "data-x"), Some("2"));
        assert_eq!(attr(&node, "data-y"), Some("3"));

        assert!(remove_attr(&mut node, "DATA-X"));
        assert!(!has_attr(&node, "data-x"));
        assert!(!remove_attr(&mut node, "data-x"));
    }
}
