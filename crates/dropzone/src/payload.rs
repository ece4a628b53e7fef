//! Drag payload descriptions, as platforms expose them during a drag.

/// Type Gecko reports for every file item while a drag is in progress.
pub const OPAQUE_FILE_TYPE: &str = "application/x-moz-file";

/// Legacy marker in a flat type list announcing that files were offered.
pub const FILES_MARKER: &str = "Files";

/// Coarse category of an offered entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    File,
    String,
    Other(String),
}

impl ItemKind {
    /// Maps the platform's kind string (`"file"`, `"string"`, ...).
    pub fn from_platform(kind: &str) -> Self {
        match kind {
            "file" => Self::File,
            "string" => Self::String,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::File => "file",
            Self::String => "string",
            Self::Other(kind) => kind,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PayloadItem {
    pub kind: ItemKind,
    pub ty: String,
}

impl PayloadItem {
    pub fn new(kind: ItemKind, ty: impl Into<String>) -> Self {
        Self {
            kind,
            ty: ty.into(),
        }
    }

    pub fn file(ty: impl Into<String>) -> Self {
        Self::new(ItemKind::File, ty)
    }

    pub fn string(ty: impl Into<String>) -> Self {
        Self::new(ItemKind::String, ty)
    }
}

/// A file in a flat payload's files list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub ty: String,
}

impl FileEntry {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Payload exposed as a list of kind-tagged items.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemizedPayload {
    pub items: Vec<PayloadItem>,
}

/// Payload exposed as flat type strings plus a separate files list.
///
/// `types` may contain legacy non-MIME markers such as `"text"` or
/// [`FILES_MARKER`]. `files` may be empty even when files were offered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlatPayload {
    pub types: Vec<String>,
    pub files: Vec<FileEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragPayload {
    Itemized(ItemizedPayload),
    Flat(FlatPayload),
}

impl DragPayload {
    pub fn itemized(items: impl IntoIterator<Item = PayloadItem>) -> Self {
        Self::Itemized(ItemizedPayload {
            items: items.into_iter().collect(),
        })
    }

    pub fn flat<S: Into<String>>(
        types: impl IntoIterator<Item = S>,
        files: impl IntoIterator<Item = FileEntry>,
    ) -> Self {
        Self::Flat(FlatPayload {
            types: types.into_iter().map(Into::into).collect(),
            files: files.into_iter().collect(),
        })
    }

    /// `true` when the payload offers nothing at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Itemized(p) => p.items.is_empty(),
            Self::Flat(p) => p.types.is_empty() && p.files.is_empty(),
        }
    }
}

impl From<ItemizedPayload> for DragPayload {
    fn from(payload: ItemizedPayload) -> Self {
        Self::Itemized(payload)
    }
}

impl From<FlatPayload> for DragPayload {
    fn from(payload: FlatPayload) -> Self {
        Self::Flat(payload)
    }
}
