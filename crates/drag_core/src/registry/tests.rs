use super::*;
use crate::config::INSTALLED_MARKER_ATTRIBUTE;
use crate::transfer::{DataTransfer, PayloadExposure};
use dom::{attr, find_node_by_id, has_attr};
use dropzone::FileEntry;

fn elem(id: u32, name: &str, attrs: &[(&str, &str)], children: Vec<Node>) -> Node {
    Node::Element {
        id: Id(id),
        name: name.to_string(),
        attributes: attrs
            .iter()
            .map(|(k, v)| (k.to_string(), Some(v.to_string())))
            .collect(),
        children,
    }
}

fn doc(children: Vec<Node>) -> Node {
    Node::Document {
        id: Id(1),
        children,
    }
}

fn text(id: u32, text: &str) -> Node {
    Node::Text {
        id: Id(id),
        text: text.to_string(),
    }
}

/// document(1) > body(2) > [ outer(3, file:*) > inner(4, string:text/plain) > span(5) > "x"(6),
///                           plain(7) ]
fn nested() -> Node {
    doc(vec![elem(
        2,
        "body",
        &[],
        vec![
            elem(
                3,
                "div",
                &[("dropzone", "move file:image/png")],
                vec![elem(
                    4,
                    "div",
                    &[("webkitdropzone", "link string:text/plain")],
                    vec![elem(5, "span", &[], vec![text(6, "x")])],
                )],
            ),
            elem(7, "p", &[], Vec::new()),
        ],
    )])
}

fn strings(exposure: PayloadExposure, types: &[&str]) -> DataTransfer {
    let mut dt = DataTransfer::new(exposure);
    for ty in types {
        dt.set_data(*ty, "payload");
    }
    dt
}

fn with_file(exposure: PayloadExposure, name: &str, ty: &str) -> DataTransfer {
    let mut dt = DataTransfer::new(exposure);
    dt.add_file(FileEntry::new(name, ty));
    dt
}

fn installed_registry(dom: &mut Node) -> DropzoneRegistry {
    let mut registry = DropzoneRegistry::default();
    registry.install_on_subtree(dom);
    registry
}

#[test]
fn install_on_subtree_finds_both_aliases() {
    let mut dom = nested();
    let mut registry = DropzoneRegistry::default();
    assert_eq!(registry.install_on_subtree(&mut dom), 2);
    assert!(registry.is_installed(Id(3)));
    assert!(registry.is_installed(Id(4)));
    assert!(!registry.is_installed(Id(7)));
    assert_eq!(registry.len(), 2);
}

#[test]
fn install_is_exactly_once() {
    let mut dom = nested();
    let mut registry = DropzoneRegistry::default();
    assert_eq!(registry.install_on_subtree(&mut dom), 2);
    assert_eq!(registry.install_on_subtree(&mut dom), 0);
    assert_eq!(registry.install_on_subtree(&mut dom), 0);
    assert_eq!(registry.len(), 2);

    let node = find_node_by_id_mut(&mut dom, Id(3)).unwrap();
    assert!(!registry.install_on_element(node));
}

#[test]
fn element_with_both_aliases_is_installed_once() {
    let mut dom = doc(vec![elem(
        2,
        "div",
        &[("dropzone", "copy"), ("webkitdropzone", "copy")],
        Vec::new(),
    )]);
    let mut registry = DropzoneRegistry::default();
    assert_eq!(registry.install_on_subtree(&mut dom), 1);
}

#[test]
fn install_writes_marker_attribute() {
    let mut dom = nested();
    installed_registry(&mut dom);
    let node = find_node_by_id(&dom, Id(3)).unwrap();
    assert_eq!(attr(node, INSTALLED_MARKER_ATTRIBUTE), Some("1"));
    let plain = find_node_by_id(&dom, Id(7)).unwrap();
    assert!(!has_attr(plain, INSTALLED_MARKER_ATTRIBUTE));
}

#[test]
fn marker_attribute_can_be_disabled() {
    let mut dom = nested();
    let mut registry = DropzoneRegistry::new(DropzoneConfig {
        marker_attribute: None,
        ..DropzoneConfig::default()
    });
    registry.install_on_subtree(&mut dom);
    let node = find_node_by_id(&dom, Id(3)).unwrap();
    assert!(!has_attr(node, INSTALLED_MARKER_ATTRIBUTE));
    assert!(registry.is_installed(Id(3)));
}

#[test]
fn empty_attribute_is_not_installed() {
    let mut dom = doc(vec![
        elem(2, "div", &[("dropzone", "")], Vec::new()),
        Node::Element {
            id: Id(3),
            name: "div".to_string(),
            attributes: vec![("dropzone".to_string(), None)],
            children: Vec::new(),
        },
    ]);
    let mut registry = DropzoneRegistry::default();
    assert_eq!(registry.install_on_subtree(&mut dom), 0);
    assert!(registry.is_empty());
}

#[test]
fn install_on_element_requires_an_id() {
    let mut node = Node::element(
        "div",
        vec![("dropzone".to_string(), Some("copy".to_string()))],
        Vec::new(),
    );
    let mut registry = DropzoneRegistry::default();
    assert!(!registry.install_on_element(&mut node));
    assert!(registry.is_empty());
}

#[test]
fn install_on_subtree_assigns_missing_ids() {
    let mut dom = Node::document(vec![Node::element(
        "div",
        vec![("dropzone".to_string(), Some("copy string:text/plain".to_string()))],
        Vec::new(),
    )]);
    let mut registry = DropzoneRegistry::default();
    assert_eq!(registry.install_on_subtree(&mut dom), 1);
    let id = dom.children()[0].id();
    assert!(id.is_assigned());
    assert!(registry.is_installed(id));
}

#[test]
fn innermost_matching_dropzone_accepts() {
    let mut dom = nested();
    let registry = installed_registry(&mut dom);

    let mut event = DragEvent::new(
        DragEventKind::Over,
        Id(5),
        strings(PayloadExposure::Itemized, &["text/plain"]),
    );
    let outcome = registry.dispatch(&dom, &mut event).unwrap();

    assert_eq!(outcome.invoked, vec![Id(4)]);
    assert_eq!(outcome.accepted_by, Some(Id(4)));
    assert!(event.default_prevented());
    assert!(event.propagation_stopped());
    assert_eq!(event.data_transfer().drop_effect(), DropEffect::Link);
}

#[test]
fn non_matching_inner_dropzone_bubbles_to_outer() {
    let mut dom = nested();
    let registry = installed_registry(&mut dom);

    let mut event = DragEvent::new(
        DragEventKind::Over,
        Id(5),
        with_file(PayloadExposure::Itemized, "cat.png", "image/png"),
    );
    let outcome = registry.dispatch(&dom, &mut event).unwrap();

    assert_eq!(outcome.invoked, vec![Id(4), Id(3)]);
    assert_eq!(outcome.accepted_by, Some(Id(3)));
    assert_eq!(event.data_transfer().drop_effect(), DropEffect::Move);
}

#[test]
fn drag_enter_does_not_touch_drop_effect() {
    let mut dom = nested();
    let registry = installed_registry(&mut dom);

    let mut event = DragEvent::new(
        DragEventKind::Enter,
        Id(4),
        strings(PayloadExposure::FlatWithheldFiles, &["text/plain"]),
    );
    let outcome = registry.dispatch(&dom, &mut event).unwrap();

    assert_eq!(outcome.accepted_by, Some(Id(4)));
    assert!(event.default_prevented());
    assert_eq!(event.data_transfer().drop_effect(), DropEffect::None);
}

#[test]
fn rejected_drag_leaves_event_untouched() {
    let mut dom = nested();
    let registry = installed_registry(&mut dom);

    let mut event = DragEvent::new(
        DragEventKind::Over,
        Id(5),
        strings(PayloadExposure::Itemized, &["text/html"]),
    );
    let outcome = registry.dispatch(&dom, &mut event).unwrap();

    assert_eq!(outcome.invoked, vec![Id(4), Id(3)]);
    assert_eq!(outcome.accepted_by, None);
    assert!(!event.default_prevented());
    assert!(!event.propagation_stopped());
    assert_eq!(event.data_transfer().drop_effect(), DropEffect::None);
}

#[test]
fn elements_outside_dropzones_reach_no_handler() {
    let mut dom = nested();
    let registry = installed_registry(&mut dom);

    let mut event = DragEvent::new(
        DragEventKind::Over,
        Id(7),
        strings(PayloadExposure::Itemized, &["text/plain"]),
    );
    let outcome = registry.dispatch(&dom, &mut event).unwrap();
    assert_eq!(outcome, DispatchOutcome::default());
    assert!(!event.default_prevented());
}

#[test]
fn uninstalled_dropzones_are_ignored() {
    let dom = nested();
    let registry = DropzoneRegistry::default();

    let mut event = DragEvent::new(
        DragEventKind::Over,
        Id(4),
        strings(PayloadExposure::Itemized, &["text/plain"]),
    );
    let outcome = registry.dispatch(&dom, &mut event).unwrap();
    assert!(outcome.invoked.is_empty());
    assert!(!event.default_prevented());
}

#[test]
fn leave_and_drop_pass_through() {
    let mut dom = nested();
    let registry = installed_registry(&mut dom);

    for kind in [DragEventKind::Leave, DragEventKind::Drop] {
        let mut event = DragEvent::new(
            kind,
            Id(4),
            strings(PayloadExposure::Itemized, &["text/plain"]),
        );
        let outcome = registry.dispatch(&dom, &mut event).unwrap();
        assert_eq!(outcome, DispatchOutcome::default(), "{}", kind.as_str());
        assert!(!event.default_prevented());
    }
}

#[test]
fn attribute_edits_after_install_apply_to_next_event() {
    let mut dom = nested();
    let registry = installed_registry(&mut dom);

    let node = find_node_by_id_mut(&mut dom, Id(4)).unwrap();
    dom::set_attr(node, "webkitdropzone", "string:text/html");

    let mut event = DragEvent::new(
        DragEventKind::Enter,
        Id(4),
        strings(PayloadExposure::Itemized, &["text/html"]),
    );
    let outcome = registry.dispatch(&dom, &mut event).unwrap();
    assert_eq!(outcome.accepted_by, Some(Id(4)));
}

#[test]
fn dispatch_rejects_unknown_and_non_element_targets() {
    let mut dom = nested();
    let registry = installed_registry(&mut dom);

    let mut event = DragEvent::new(DragEventKind::Over, Id(99), DataTransfer::default());
    assert_eq!(
        registry.dispatch(&dom, &mut event),
        Err(DispatchError::UnknownTarget { id: Id(99) })
    );

    let mut event = DragEvent::new(DragEventKind::Over, Id(6), DataTransfer::default());
    let err = registry.dispatch(&dom, &mut event).unwrap_err();
    assert_eq!(err, DispatchError::NotAnElement { id: Id(6) });
    assert!(err.to_string().contains("not an element"));
}
