//! # tomlnode-core
//!
//! TOML parsing for callers on the far side of a language boundary.
//!
//! Text goes through a grammar engine (the `toml` crate by default) and the
//! resulting native tree is converted into a flat, self-contained [`Node`]
//! tree: one closed tagged value per TOML value, owned containers, and total
//! accessors that return a harmless default instead of failing. Grammar
//! failures come back as data in the [`ParseResult`], never as a panic.
//!
//! ## Quick start
//!
//! ```rust
//! use tomlnode_core::{parse, NodeType};
//!
//! let result = parse("[server]\nport = 8080\nhosts = [\"a\", \"b\"]");
//! assert!(result.success());
//!
//! let server = result.root().get_table_value("server").unwrap();
//! assert_eq!(server.get_table_key(0), "port");
//! assert_eq!(server.get_table_value("port").unwrap().get_integer(), 8080);
//!
//! let hosts = server.get_table_value("hosts").unwrap();
//! assert_eq!(hosts.get_type(), NodeType::Array);
//! assert_eq!(hosts.get_array_element(1).get_string(), "b");
//!
//! let broken = parse("key = ");
//! assert!(!broken.success());
//! assert_eq!(broken.error().unwrap().line, 1);
//! ```
//!
//! ## Modules
//!
//! - [`node`] — `Node` value model, factories and total accessors
//! - [`grammar`] — `GrammarEngine` seam and the default `toml`-backed engine
//! - [`convert`] — native tree → `Node` conversion
//! - [`parse`] — `parse` / `parse_with` entry points and `ParseResult`
//! - [`render`] — RFC 3339 display, plain JSON and toml-test JSON output
//! - [`filter`] — dotted-path lookup and key redaction
//! - [`error`] — `ParseError`

pub mod convert;
pub mod error;
pub mod filter;
pub mod grammar;
pub mod node;
pub mod parse;
pub mod render;

pub use error::ParseError;
pub use filter::{filter_keys, RedactPreset};
pub use grammar::{GrammarEngine, TomlEngine};
pub use node::{DateTimeValue, DateValue, Node, NodeType, TimeValue};
pub use parse::{parse, parse_with, ParseResult};
pub use render::to_tagged_json;
