pub type NodeId = u32;

/// Node identifier. `Id(0)` means "not assigned yet", see
/// [`assign_node_ids`](crate::assign_node_ids).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(pub NodeId);

impl Id {
    pub const UNASSIGNED: Id = Id(0);

    pub const fn is_assigned(self) -> bool {
        self.0 != 0
    }
}

/// Attribute list in source order. A `None` value is a boolean attribute
/// (`<div dropzone>`), which reads as the empty string.
pub type Attributes = Vec<(String, Option<String>)>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Document {
        id: Id,
        children: Vec<Node>,
    },
    Element {
        id: Id,
        name: String,
        attributes: Attributes,
        children: Vec<Node>,
    },
    Text {
        id: Id,
        text: String,
    },
    Comment {
        id: Id,
        text: String,
    },
}

impl Node {
    pub fn document(children: Vec<Node>) -> Self {
        Node::Document {
            id: Id::UNASSIGNED,
            children,
        }
    }

    pub fn element(name: impl Into<String>, attributes: Attributes, children: Vec<Node>) -> Self {
        Node::Element {
            id: Id::UNASSIGNED,
            name: name.into(),
            attributes,
            children,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text {
            id: Id::UNASSIGNED,
            text: text.into(),
        }
    }

    pub fn id(&self) -> Id {
        match self {
            Node::Document { id, .. } => *id,
            Node::Element { id, .. } => *id,
            Node::Text { id, .. } => *id,
            Node::Comment { id, .. } => *id,
        }
    }

    pub fn set_id(&mut self, new_id: Id) {
        match self {
            Node::Document { id, .. } => *id = new_id,
            Node::Element { id, .. } => *id = new_id,
            Node::Text { id, .. } => *id = new_id,
            Node::Comment { id, .. } => *id = new_id,
        }
    }

    /// Tag name for elements, `None` for every other node type.
    pub fn name(&self) -> Option<&str> {
        match self {
            Node::Element { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element { .. })
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Document { children, .. } | Node::Element { children, .. } => children,
            _ => &[],
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Document { children, .. } => Some(children),
            Node::Element { children, .. } => Some(children),
            _ => None,
        }
    }
}
