//! Drag data store and its per-platform exposure during the drag phase.
//!
//! A drag source fills a [`DataTransfer`] with string entries and files.
//! While the drag is in progress, targets only get a restricted view of it,
//! and that view differs between browser families. [`PayloadExposure`]
//! names those views; [`DataTransfer::payload`] produces the one the
//! matcher sees.

use dropzone::{DragPayload, FILES_MARKER, FileEntry, OPAQUE_FILE_TYPE, Operation, PayloadItem};

/// How a platform exposes drag data to drop targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PayloadExposure {
    /// Kind-tagged items with real file types (Blink, EdgeHTML).
    #[default]
    Itemized,
    /// Kind-tagged items; every file reports `application/x-moz-file` (Gecko).
    ItemizedOpaqueFiles,
    /// Flat type list with a `"Files"` marker; the files list stays empty
    /// until the drop (WebKit).
    FlatWithheldFiles,
    /// Flat type list with a populated files list.
    Flat,
}

impl PayloadExposure {
    pub const ALL: [PayloadExposure; 4] = [
        Self::Itemized,
        Self::ItemizedOpaqueFiles,
        Self::FlatWithheldFiles,
        Self::Flat,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Itemized => "itemized",
            Self::ItemizedOpaqueFiles => "itemized-opaque-files",
            Self::FlatWithheldFiles => "flat-withheld-files",
            Self::Flat => "flat",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.label() == label)
    }
}

impl std::fmt::Display for PayloadExposure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The `dropEffect` a target reports back to the platform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DropEffect {
    #[default]
    None,
    Copy,
    Move,
    Link,
}

impl DropEffect {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Copy => "copy",
            Self::Move => "move",
            Self::Link => "link",
        }
    }
}

impl From<Operation> for DropEffect {
    fn from(op: Operation) -> Self {
        match op {
            Operation::Copy => Self::Copy,
            Operation::Move => Self::Move,
            Operation::Link => Self::Link,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataTransfer {
    exposure: PayloadExposure,
    strings: Vec<(String, String)>,
    files: Vec<FileEntry>,
    drop_effect: DropEffect,
}

impl DataTransfer {
    pub fn new(exposure: PayloadExposure) -> Self {
        Self {
            exposure,
            ..Self::default()
        }
    }

    pub fn exposure(&self) -> PayloadExposure {
        self.exposure
    }

    /// Stores `data` under `ty`, replacing an existing entry of that type.
    pub fn set_data(&mut self, ty: impl Into<String>, data: impl Into<String>) {
        let ty = ty.into();
        let data = data.into();
        match self.strings.iter_mut().find(|(t, _)| *t == ty) {
            Some((_, existing)) => *existing = data,
            None => self.strings.push((ty, data)),
        }
    }

    pub fn get_data(&self, ty: &str) -> Option<&str> {
        self.strings
            .iter()
            .find(|(t, _)| t == ty)
            .map(|(_, data)| data.as_str())
    }

    pub fn add_file(&mut self, file: FileEntry) {
        self.files.push(file);
    }

    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    pub fn drop_effect(&self) -> DropEffect {
        self.drop_effect
    }

    pub fn set_drop_effect(&mut self, effect: DropEffect) {
        self.drop_effect = effect;
    }

    /// The payload a drop target sees during the drag, per [`PayloadExposure`].
    pub fn payload(&self) -> DragPayload {
        let string_types = self.strings.iter().map(|(ty, _)| ty.clone());

        match self.exposure {
            PayloadExposure::Itemized => DragPayload::itemized(
                string_types
                    .map(PayloadItem::string)
                    .chain(self.files.iter().map(|f| PayloadItem::file(f.ty.clone()))),
            ),
            PayloadExposure::ItemizedOpaqueFiles => DragPayload::itemized(
                string_types
                    .map(PayloadItem::string)
                    .chain(self.files.iter().map(|_| PayloadItem::file(OPAQUE_FILE_TYPE))),
            ),
            PayloadExposure::FlatWithheldFiles => DragPayload::flat(self.flat_types(), []),
            PayloadExposure::Flat => DragPayload::flat(self.flat_types(), self.files.clone()),
        }
    }

    fn flat_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.strings.iter().map(|(ty, _)| ty.clone()).collect();
        if !self.files.is_empty() {
            types.push(FILES_MARKER.to_string());
        }
        types
    }
}
