//! Parse entry point: text in, [`ParseResult`] out.

use crate::convert::convert_table;
use crate::error::ParseError;
use crate::grammar::{GrammarEngine, TomlEngine};
use crate::node::Node;

/// Outcome of one [`parse`] call.
///
/// Either `success()` is true and `root()` is the document table, or
/// `error()` carries the grammar failure and `root()` is the empty node.
/// Grammar failures are data here, never a panic or an `Err` escaping
/// `parse`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    success: bool,
    error: Option<ParseError>,
    root: Node,
}

impl ParseResult {
    fn parsed(root: Node) -> Self {
        Self {
            success: true,
            error: None,
            root,
        }
    }

    fn failed(error: ParseError) -> Self {
        Self {
            success: false,
            error: Some(error),
            root: Node::default(),
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    /// The document table. Only meaningful when [`success`](Self::success) is true.
    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    pub fn into_result(self) -> Result<Node, ParseError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.root),
        }
    }
}

impl From<ParseResult> for Result<Node, ParseError> {
    fn from(result: ParseResult) -> Self {
        result.into_result()
    }
}

/// Parse TOML text with the default engine.
///
/// The root of a successful parse is always a table, empty for an empty
/// document. The function is pure: the same text always yields an equal
/// result.
///
/// ```
/// use tomlnode_core::{parse, NodeType};
///
/// let result = parse("answer = 42");
/// assert!(result.success());
/// let answer = result.root().get_table_value("answer").unwrap();
/// assert_eq!(answer.get_type(), NodeType::Integer);
/// assert_eq!(answer.get_integer(), 42);
/// ```
pub fn parse(text: &str) -> ParseResult {
    parse_with(TomlEngine, text)
}

/// Parse TOML text with a caller-supplied grammar engine.
pub fn parse_with<E: GrammarEngine>(engine: E, text: &str) -> ParseResult {
    tracing::debug!(bytes = text.len(), "parsing document");

    match engine.parse_tree(text) {
        Ok(table) => {
            let root = convert_table(&table);
            tracing::debug!(keys = root.get_table_size(), "document converted");
            ParseResult::parsed(root)
        }
        Err(err) => {
            tracing::debug!(
                line = err.line,
                column = err.column,
                description = %err.description,
                "grammar error"
            );
            ParseResult::failed(err)
        }
    }
}
