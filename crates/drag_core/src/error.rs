use dom::Id;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchError {
    /// The event target is not part of the tree.
    UnknownTarget { id: Id },
    /// The event target is a document, text or comment node.
    NotAnElement { id: Id },
}

impl std::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchError::UnknownTarget { id } => {
                write!(f, "drag event target {} is not in the tree", id.0)
            }
            DispatchError::NotAnElement { id } => {
                write!(f, "drag event target {} is not an element", id.0)
            }
        }
    }
}

impl std::error::Error for DispatchError {}
