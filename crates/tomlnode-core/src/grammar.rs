//! The grammar engine seam.
//!
//! Tokenizing, syntax validation, duplicate-key detection and table
//! resolution all live behind [`GrammarEngine`]. The converter only ever sees
//! the native tree the engine hands back, or the single error it reports.

use crate::error::{ParseError, Result};

/// Anything that can turn TOML text into a native parse tree.
///
/// Implementations must be deterministic and must report at most one error:
/// the first failure in the document.
pub trait GrammarEngine {
    fn parse_tree(&self, text: &str) -> Result<toml::Table>;
}

/// The default engine, backed by the `toml` crate.
///
/// Built with `preserve_order`, so table iteration follows source order.
#[derive(Debug, Default, Clone, Copy)]
pub struct TomlEngine;

impl GrammarEngine for TomlEngine {
    fn parse_tree(&self, text: &str) -> Result<toml::Table> {
        toml::from_str::<toml::Table>(text).map_err(|err| grammar_error(text, &err))
    }
}

impl<E: GrammarEngine + ?Sized> GrammarEngine for &E {
    fn parse_tree(&self, text: &str) -> Result<toml::Table> {
        (**self).parse_tree(text)
    }
}

/// Map a `toml` failure onto a positioned [`ParseError`].
///
/// Errors without a span (rare; the engine attaches one to every syntax
/// error) are reported at the start of the document.
fn grammar_error(text: &str, err: &toml::de::Error) -> ParseError {
    let offset = err.span().map(|span| span.start);
    let description = describe(err.message(), text, offset);
    match offset {
        Some(offset) => ParseError::at_offset(description, text, offset),
        None => ParseError::new(description, 1, 1),
    }
}

/// Fold the engine's message onto one line.
///
/// The engine splits a message across lines ("invalid table header" /
/// "expected `.`, `]`") and leaves it empty when input ends mid-value.
fn describe(message: &str, text: &str, offset: Option<usize>) -> String {
    let description = message
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("; ");
    if !description.is_empty() {
        return description;
    }
    match offset {
        Some(offset) if offset >= text.trim_end().len() => "unexpected end of input".to_string(),
        _ => "invalid TOML".to_string(),
    }
}

