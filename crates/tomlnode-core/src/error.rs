//! Error type for grammar failures surfaced by [`parse`](crate::parse).

use serde::Serialize;
use thiserror::Error;

/// The first grammar failure found in a document.
///
/// Only one error is ever reported: the grammar engine stops at the first
/// failure and no recovery is attempted. `line` and `column` are 1-based;
/// `column` counts Unicode scalar values, not bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("TOML parse error at line {line}, column {column}: {description}")]
pub struct ParseError {
    pub description: String,
    pub line: usize,
    pub column: usize,
}

impl ParseError {
    pub fn new(description: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            description: description.into(),
            line: line.max(1),
            column: column.max(1),
        }
    }

    /// Build an error positioned at a byte offset within `text`.
    ///
    /// Offsets past the end clamp to the end of the text; offsets inside a
    /// multi-byte character snap back to the start of that character.
    pub fn at_offset(description: impl Into<String>, text: &str, offset: usize) -> Self {
        let (line, column) = line_column(text, offset);
        Self::new(description, line, column)
    }
}

/// Convenience alias used throughout tomlnode-core.
pub type Result<T> = std::result::Result<T, ParseError>;

fn line_column(text: &str, offset: usize) -> (usize, usize) {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    let before = &text[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}
