//! WASM bindings for tomlnode-core.
//!
//! Exposes `parse` and the node accessors as `#[wasm_bindgen]` classes so
//! JavaScript can walk the tree directly, plus `parseToJson` for callers that
//! only want a JSON string. Built with `wasm-bindgen-cli`.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p tomlnode-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/tomlnode-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/tomlnode_wasm.wasm
//! ```
//!
//! Every accessor that returns a node hands JavaScript its own copy of that
//! subtree. Walk large documents top-down rather than re-fetching the root.

use tomlnode_core::{DateTimeValue, DateValue, Node, ParseError, ParseResult, TimeValue};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Value records
// ---------------------------------------------------------------------------

#[wasm_bindgen]
#[derive(Clone, Copy)]
pub struct TomlDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl From<DateValue> for TomlDate {
    fn from(d: DateValue) -> Self {
        Self {
            year: d.year,
            month: d.month,
            day: d.day,
        }
    }
}

#[wasm_bindgen]
#[derive(Clone, Copy)]
pub struct TomlTime {
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
    pub nanosecond: i32,
}

impl From<TimeValue> for TomlTime {
    fn from(t: TimeValue) -> Self {
        Self {
            hour: t.hour,
            minute: t.minute,
            second: t.second,
            nanosecond: t.nanosecond,
        }
    }
}

#[wasm_bindgen]
#[derive(Clone, Copy)]
pub struct TomlDateTime {
    pub date: TomlDate,
    pub time: TomlTime,
    #[wasm_bindgen(js_name = "hasOffset")]
    pub has_offset: bool,
    #[wasm_bindgen(js_name = "offsetMinutes")]
    pub offset_minutes: i32,
}

impl From<DateTimeValue> for TomlDateTime {
    fn from(dt: DateTimeValue) -> Self {
        Self {
            date: dt.date.into(),
            time: dt.time.into(),
            has_offset: dt.has_offset,
            offset_minutes: dt.offset_minutes,
        }
    }
}

#[wasm_bindgen(getter_with_clone)]
pub struct TomlParseError {
    pub description: String,
    pub line: usize,
    pub column: usize,
}

impl From<&ParseError> for TomlParseError {
    fn from(err: &ParseError) -> Self {
        Self {
            description: err.description.clone(),
            line: err.line,
            column: err.column,
        }
    }
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// One TOML value. `getType()` returns the stable tag number
/// (0 none, 1 string, 2 integer, 3 float, 4 boolean, 5 date, 6 time,
/// 7 date-time, 8 array, 9 table).
#[wasm_bindgen]
pub struct TomlNode {
    inner: Node,
}

impl From<Node> for TomlNode {
    fn from(inner: Node) -> Self {
        Self { inner }
    }
}

#[wasm_bindgen]
impl TomlNode {
    #[wasm_bindgen(js_name = "getType")]
    pub fn get_type(&self) -> i32 {
        self.inner.get_type() as i32
    }

    #[wasm_bindgen(js_name = "getString")]
    pub fn get_string(&self) -> String {
        self.inner.get_string().to_string()
    }

    /// Returned as a `BigInt` so the full 64-bit range survives.
    #[wasm_bindgen(js_name = "getInteger")]
    pub fn get_integer(&self) -> i64 {
        self.inner.get_integer()
    }

    #[wasm_bindgen(js_name = "getFloat")]
    pub fn get_float(&self) -> f64 {
        self.inner.get_float()
    }

    #[wasm_bindgen(js_name = "getBoolean")]
    pub fn get_boolean(&self) -> bool {
        self.inner.get_boolean()
    }

    #[wasm_bindgen(js_name = "getDate")]
    pub fn get_date(&self) -> TomlDate {
        self.inner.get_date().into()
    }

    #[wasm_bindgen(js_name = "getTime")]
    pub fn get_time(&self) -> TomlTime {
        self.inner.get_time().into()
    }

    #[wasm_bindgen(js_name = "getDateTime")]
    pub fn get_date_time(&self) -> TomlDateTime {
        self.inner.get_date_time().into()
    }

    #[wasm_bindgen(js_name = "getArraySize")]
    pub fn get_array_size(&self) -> usize {
        self.inner.get_array_size()
    }

    #[wasm_bindgen(js_name = "getArrayElement")]
    pub fn get_array_element(&self, index: usize) -> TomlNode {
        self.inner.get_array_element(index).clone().into()
    }

    #[wasm_bindgen(js_name = "getTableSize")]
    pub fn get_table_size(&self) -> usize {
        self.inner.get_table_size()
    }

    #[wasm_bindgen(js_name = "getTableKey")]
    pub fn get_table_key(&self, index: usize) -> String {
        self.inner.get_table_key(index).to_string()
    }

    #[wasm_bindgen(js_name = "getTableValue")]
    pub fn get_table_value(&self, key: &str) -> Option<TomlNode> {
        self.inner.get_table_value(key).cloned().map(TomlNode::from)
    }

    #[wasm_bindgen(js_name = "getPath")]
    pub fn get_path(&self, path: &str) -> Option<TomlNode> {
        self.inner.get_path(path).cloned().map(TomlNode::from)
    }

    /// Serialize this subtree as JSON; `tagged` selects the toml-test shape.
    #[wasm_bindgen(js_name = "toJson")]
    pub fn to_json(&self, tagged: bool) -> Result<String, JsValue> {
        node_to_json(&self.inner, tagged)
    }
}

// ---------------------------------------------------------------------------
// Parse result
// ---------------------------------------------------------------------------

#[wasm_bindgen]
pub struct TomlParseResult {
    inner: ParseResult,
}

#[wasm_bindgen]
impl TomlParseResult {
    #[wasm_bindgen(getter)]
    pub fn success(&self) -> bool {
        self.inner.success()
    }

    #[wasm_bindgen(getter)]
    pub fn error(&self) -> Option<TomlParseError> {
        self.inner.error().map(TomlParseError::from)
    }

    /// The document table; an empty node when parsing failed.
    #[wasm_bindgen(getter)]
    pub fn root(&self) -> TomlNode {
        self.inner.root().clone().into()
    }
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Parse TOML text. Grammar errors are reported through `result.error`,
/// never thrown.
#[wasm_bindgen]
pub fn parse(text: &str) -> TomlParseResult {
    TomlParseResult {
        inner: tomlnode_core::parse(text),
    }
}

/// Parse TOML text and return the tree as a JSON string.
///
/// Throws a JS error carrying the line and column if the text is not valid TOML.
#[wasm_bindgen(js_name = "parseToJson")]
pub fn parse_to_json(text: &str, tagged: bool) -> Result<String, JsValue> {
    let root = tomlnode_core::parse(text)
        .into_result()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    node_to_json(&root, tagged)
}

fn node_to_json(node: &Node, tagged: bool) -> Result<String, JsValue> {
    let json = if tagged {
        serde_json::to_string(&tomlnode_core::to_tagged_json(node))
    } else {
        serde_json::to_string(node)
    };
    json.map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
