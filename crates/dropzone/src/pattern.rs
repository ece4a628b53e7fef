//! Dropzone attribute grammar.
//!
//! The attribute is a whitespace-separated token list. Recognized tokens are
//! the operation keywords `copy`, `move` and `link`, and typed entries of
//! the form `kind:type` where `kind` is `file` or `string`. Everything else
//! is ignored; parsing never fails.

use crate::operation::Operation;
use crate::payload::ItemKind;
use memchr::memchr;
use std::collections::BTreeSet;

/// One whitespace-delimited piece of a dropzone attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    Operation(Operation),
    /// `kind:type`. `ty` is everything after the first colon.
    Typed {
        kind: &'a str,
        ty: &'a str,
    },
    Unrecognized(&'a str),
}

impl<'a> Token<'a> {
    pub fn classify(token: &'a str) -> Self {
        if let Some(op) = Operation::from_keyword(token) {
            return Token::Operation(op);
        }
        match memchr(b':', token.as_bytes()) {
            Some(colon) => Token::Typed {
                kind: &token[..colon],
                ty: &token[colon + 1..],
            },
            None => Token::Unrecognized(token),
        }
    }
}

pub fn tokenize(attribute: &str) -> impl Iterator<Item = Token<'_>> {
    attribute.split_whitespace().map(Token::classify)
}

/// Parsed dropzone attribute.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributePattern {
    operation: Option<Operation>,
    file_types: BTreeSet<String>,
    string_types: BTreeSet<String>,
    has_file_types: bool,
}

impl AttributePattern {
    /// The first operation keyword in the attribute, if any.
    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    pub fn file_types(&self) -> &BTreeSet<String> {
        &self.file_types
    }

    pub fn string_types(&self) -> &BTreeSet<String> {
        &self.string_types
    }

    /// `true` iff the attribute had at least one `file:` token.
    pub fn has_file_types(&self) -> bool {
        self.has_file_types
    }

    /// The acceptance set for `kind`; kinds other than file/string have none.
    pub fn types_for(&self, kind: &ItemKind) -> Option<&BTreeSet<String>> {
        match kind {
            ItemKind::File => Some(&self.file_types),
            ItemKind::String => Some(&self.string_types),
            ItemKind::Other(_) => None,
        }
    }

    pub fn accepts(&self, kind: &ItemKind, ty: &str) -> bool {
        self.types_for(kind).is_some_and(|types| types.contains(ty))
    }

    /// `true` when no typed entry was recognized, so nothing can ever match.
    pub fn accepts_nothing(&self) -> bool {
        self.file_types.is_empty() && self.string_types.is_empty()
    }
}

/// Parses a dropzone attribute value.
pub fn parse(attribute: &str) -> AttributePattern {
    let mut pattern = AttributePattern::default();

    for token in tokenize(attribute) {
        match token {
            Token::Operation(op) => {
                // First keyword wins; later ones are ignored, not overrides.
                if pattern.operation.is_none() {
                    pattern.operation = Some(op);
                }
            }
            Token::Typed { kind: "file", ty } => {
                pattern.file_types.insert(ty.to_string());
                pattern.has_file_types = true;
            }
            Token::Typed { kind: "string", ty } => {
                pattern.string_types.insert(ty.to_string());
            }
            Token::Typed { kind, ty } => {
                log::trace!(target: "dropzone.parse", "ignoring entry of unknown kind {kind:?} (type {ty:?})");
            }
            Token::Unrecognized(raw) => {
                log::trace!(target: "dropzone.parse", "ignoring unrecognized token {raw:?}");
            }
        }
    }

    pattern
}
