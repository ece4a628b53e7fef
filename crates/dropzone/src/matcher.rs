//! Payload matching.
//!
//! During a drag, platforms withhold real file types for privacy. Where the
//! true type is unknowable the matcher accepts the drop when the attribute
//! lists any `file:` type, preferring false positives to file entries that
//! could never match.

use crate::operation::Operation;
use crate::pattern::{AttributePattern, parse};
use crate::payload::{
    DragPayload, FILES_MARKER, FlatPayload, ItemKind, ItemizedPayload, OPAQUE_FILE_TYPE,
};
use memchr::memchr;

/// Which rule accepted the payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchReason {
    /// A string entry's type is listed under `string:`.
    StringType,
    /// A file's type is listed under `file:`.
    FileType,
    /// A file item reported the opaque Gecko type and the pattern has file types.
    OpaqueFile,
    /// The flat type list announced files, the files list was empty, and the
    /// pattern has file types.
    WithheldFiles,
}

impl MatchReason {
    /// `true` for the two permissive fallbacks.
    pub const fn is_fallback(self) -> bool {
        matches!(self, Self::OpaqueFile | Self::WithheldFiles)
    }
}

/// A successful match. Borrows the pattern so callers need not re-parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match<'p> {
    pattern: &'p AttributePattern,
    reason: MatchReason,
}

impl<'p> Match<'p> {
    pub fn pattern(&self) -> &'p AttributePattern {
        self.pattern
    }

    pub fn reason(&self) -> MatchReason {
        self.reason
    }

    pub fn operation(&self) -> Option<Operation> {
        self.pattern.operation()
    }
}

/// Checks whether `payload` offers anything `pattern` accepts.
pub fn match_payload<'p>(pattern: &'p AttributePattern, payload: &DragPayload) -> Option<Match<'p>> {
    let reason = match payload {
        DragPayload::Itemized(items) => match_itemized(pattern, items),
        DragPayload::Flat(flat) => match_flat(pattern, flat),
    };

    log::trace!(target: "dropzone.match", "pattern {pattern:?} vs payload {payload:?}: {reason:?}");
    reason.map(|reason| Match { pattern, reason })
}

/// Parses `attribute` and matches it against `payload`.
pub fn matches(attribute: &str, payload: &DragPayload) -> bool {
    match_payload(&parse(attribute), payload).is_some()
}

fn match_itemized(pattern: &AttributePattern, payload: &ItemizedPayload) -> Option<MatchReason> {
    for item in &payload.items {
        if pattern.accepts(&item.kind, &item.ty) {
            return Some(match item.kind {
                ItemKind::File => MatchReason::FileType,
                _ => MatchReason::StringType,
            });
        }

        if item.kind == ItemKind::File && item.ty == OPAQUE_FILE_TYPE && pattern.has_file_types() {
            return Some(MatchReason::OpaqueFile);
        }
    }

    None
}

fn match_flat(pattern: &AttributePattern, payload: &FlatPayload) -> Option<MatchReason> {
    let mut has_files = false;

    for ty in &payload.types {
        if memchr(b'/', ty.as_bytes()).is_none() {
            // Legacy markers such as "text" and "Files" are not MIME types.
            if ty == FILES_MARKER {
                has_files = true;
            }
            continue;
        }
        if pattern.string_types().contains(ty.as_str()) {
            return Some(MatchReason::StringType);
        }
    }

    // Some platforms never populate the files list during a drag.
    if payload
        .files
        .iter()
        .any(|file| pattern.file_types().contains(file.ty.as_str()))
    {
        return Some(MatchReason::FileType);
    }

    if has_files && payload.files.is_empty() && pattern.has_file_types() {
        return Some(MatchReason::WithheldFiles);
    }

    None
}
