use dropzone::Operation;

/// Standard attribute name.
pub const DROPZONE_ATTRIBUTE: &str = "dropzone";

/// Prefixed name shipped by Blink and WebKit.
pub const WEBKIT_DROPZONE_ATTRIBUTE: &str = "webkitdropzone";

/// Attribute written on elements once their handlers are installed.
pub const INSTALLED_MARKER_ATTRIBUTE: &str = "data-dropzone-polyfilled";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropzoneConfig {
    /// Attribute names carrying the dropzone value, in lookup order. The
    /// first one present on an element is used; values are never merged.
    pub attribute_names: Vec<String>,
    /// Attribute set to `"1"` on installed elements. `None` leaves the tree
    /// untouched.
    pub marker_attribute: Option<String>,
    /// Drop effect suggested on drag-over when the attribute names no operation.
    pub default_operation: Operation,
}

impl Default for DropzoneConfig {
    fn default() -> Self {
        Self {
            attribute_names: vec![
                DROPZONE_ATTRIBUTE.to_string(),
                WEBKIT_DROPZONE_ATTRIBUTE.to_string(),
            ],
            marker_attribute: Some(INSTALLED_MARKER_ATTRIBUTE.to_string()),
            default_operation: Operation::Copy,
        }
    }
}
