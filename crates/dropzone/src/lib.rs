//! # dropzone
//!
//! Parser and payload matcher for the `dropzone` attribute, for hosts whose
//! engine no longer implements it natively.
//!
//! - [`parse`] turns attribute text into an [`AttributePattern`]
//! - [`match_payload`] checks a [`DragPayload`] against a pattern
//!
//! Both are pure and total: any attribute text parses, and any payload
//! either matches or does not. There is no error path.
//!
//! ```
//! use dropzone::{DragPayload, Operation, PayloadItem, match_payload, parse};
//!
//! let pattern = parse("move string:text/uri-list");
//! let payload = DragPayload::itemized([PayloadItem::string("text/uri-list")]);
//!
//! let hit = match_payload(&pattern, &payload).expect("uri-list is accepted");
//! assert_eq!(hit.operation(), Some(Operation::Move));
//! ```

mod matcher;
mod operation;
mod pattern;
mod payload;

pub use matcher::{Match, MatchReason, match_payload, matches};
pub use operation::{Operation, ParseOperationError};
pub use pattern::{AttributePattern, Token, parse, tokenize};
pub use payload::{
    DragPayload, FILES_MARKER, FileEntry, FlatPayload, ItemKind, ItemizedPayload,
    OPAQUE_FILE_TYPE, PayloadItem,
};
