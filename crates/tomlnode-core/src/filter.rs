//! Dotted-path lookup and pattern-based key removal over a [`Node`] tree.
//!
//! Key removal is mostly used to redact credentials before a configuration
//! is dumped or logged.
//!
//! # Pattern syntax
//!
//! - `"password"` -- remove the top-level key named "password"
//! - `"database.password"` -- remove "password" inside the "database" table
//! - `"*.password"` -- a leading wildcard floats: remove "password" at any depth
//! - `"servers.*.token"` -- an inner wildcard stands for exactly one level:
//!   remove "token" inside each element of a "servers" array, or inside each
//!   sub-table of a "servers" table, but not `servers.token` itself
//!
//! Arrays do not consume a segment, so `"servers.token"` also reaches the
//! tables of an array under `servers`.

use crate::node::{Node, NodeType};

/// A parsed filter pattern.
///
/// `"*.a.b"` parses to `floating: true, segments: ["a", "b"]`: the pattern may
/// start matching at any depth. Every other pattern is anchored where it is
/// applied. A bare `"*"` stays anchored and matches every key.
#[derive(Debug, Clone, Copy)]
struct Pattern<'p> {
    segments: &'p [&'p str],
    floating: bool,
}

impl<'p> Pattern<'p> {
    fn new(segments: &'p [&'p str]) -> Self {
        match segments.split_first() {
            Some((&"*", rest)) if !rest.is_empty() => Self {
                segments: rest,
                floating: true,
            },
            _ => Self {
                segments,
                floating: false,
            },
        }
    }

    fn anchored(segments: &'p [&'p str]) -> Self {
        Self {
            segments,
            floating: false,
        }
    }
}

/// What one pattern asks for at one table key.
enum KeyMatch<'p> {
    Remove,
    Descend(Pattern<'p>),
    Skip,
}

fn match_key<'p>(segments: &'p [&'p str], key: &str) -> KeyMatch<'p> {
    match segments.split_first() {
        Some((&first, rest)) if first == "*" || first == key => {
            if rest.is_empty() {
                KeyMatch::Remove
            } else {
                KeyMatch::Descend(Pattern::anchored(rest))
            }
        }
        _ => KeyMatch::Skip,
    }
}

impl Node {
    /// Walk nested tables along a dotted path such as `"server.tls.cert"`.
    ///
    /// Returns `None` if any segment is missing or the walk reaches a value
    /// that is not a table before the path is exhausted. Keys that themselves
    /// contain dots cannot be addressed this way; use
    /// [`get_table_value`](Node::get_table_value) for those.
    pub fn get_path(&self, path: &str) -> Option<&Node> {
        path.split('.').try_fold(self, |node, segment| {
            if node.get_type() != NodeType::Table {
                return None;
            }
            node.get_table_value(segment)
        })
    }
}

/// Return a copy of `node` with every key matching `patterns` removed.
///
/// ```
/// use tomlnode_core::{filter_keys, parse};
///
/// let root = parse("user = \"ci\"\npassword = \"hunter2\"").into_root();
/// let redacted = filter_keys(&root, &["password"]);
/// assert_eq!(redacted.get_table_size(), 1);
/// assert!(redacted.get_table_value("password").is_none());
/// ```
pub fn filter_keys(node: &Node, patterns: &[&str]) -> Node {
    if patterns.is_empty() {
        return node.clone();
    }
    let split: Vec<Vec<&str>> = patterns.iter().map(|p| p.split('.').collect()).collect();
    let active: Vec<Pattern<'_>> = split.iter().map(|s| Pattern::new(s)).collect();
    apply_filter(node, &active)
}

fn apply_filter(node: &Node, patterns: &[Pattern<'_>]) -> Node {
    if patterns.is_empty() {
        return node.clone();
    }
    match node.get_type() {
        NodeType::Table => filter_table(node, patterns),
        NodeType::Array => filter_array(node, patterns),
        _ => node.clone(),
    }
}

fn filter_table(node: &Node, patterns: &[Pattern<'_>]) -> Node {
    let mut keys = Vec::with_capacity(node.get_table_size());
    let mut values = Vec::with_capacity(node.get_table_size());

    'keys: for (key, child) in node.entries() {
        let mut child_patterns = Vec::new();
        for pattern in patterns {
            match match_key(pattern.segments, key) {
                KeyMatch::Remove => continue 'keys,
                KeyMatch::Descend(next) => child_patterns.push(next),
                KeyMatch::Skip => {}
            }
            if pattern.floating {
                child_patterns.push(*pattern);
            }
        }
        keys.push(key.to_string());
        values.push(apply_filter(child, &child_patterns));
    }

    Node::make_table(keys, values)
}

/// Every pattern reaches each element unchanged. A pattern whose next
/// segment is `*` may also spend it on the element itself.
fn filter_array(node: &Node, patterns: &[Pattern<'_>]) -> Node {
    let mut element_patterns = patterns.to_vec();
    for pattern in patterns {
        if let Some((&"*", rest)) = pattern.segments.split_first() {
            if !rest.is_empty() {
                element_patterns.push(Pattern::anchored(rest));
            }
        }
    }
    Node::make_array(
        node.elements()
            .iter()
            .map(|elem| apply_filter(elem, &element_patterns))
            .collect(),
    )
}

/// Predefined pattern sets.
pub struct RedactPreset;

impl RedactPreset {
    /// Common credential-bearing keys, removed at any depth.
    pub fn secrets() -> Vec<&'static str> {
        vec![
            "*.password",
            "*.passwd",
            "*.secret",
            "*.token",
            "*.api_key",
            "*.apikey",
            "*.private_key",
            "*.access_key",
            "*.secret_key",
        ]
    }
}
