//! # tomlnode-python
//!
//! Python bindings for tomlnode-core, built with PyO3.
//!
//! Exposes the following to Python as the `tomlnode` module:
//!
//! - `parse(text)` -- TOML string -> `ParseResult` (errors returned, not raised)
//! - `parse_to_json(text, tagged=False)` -- TOML string -> JSON string
//! - `Node`, `ParseResult`, `ParseError`, `Date`, `Time`, `DateTime` classes
//! - `NodeType` integer constants (`NODE_NONE` .. `NODE_TABLE`)

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use tomlnode_core::{DateTimeValue, DateValue, NodeType, TimeValue};

// ---------------------------------------------------------------------------
// Value records
// ---------------------------------------------------------------------------

/// A calendar date.
#[pyclass(name = "Date", frozen, get_all)]
#[derive(Clone, Copy)]
struct PyDate {
    year: i32,
    month: i32,
    day: i32,
}

#[pymethods]
impl PyDate {
    fn __repr__(&self) -> String {
        format!("Date({})", DateValue::from(*self))
    }
}

impl From<DateValue> for PyDate {
    fn from(d: DateValue) -> Self {
        Self {
            year: d.year,
            month: d.month,
            day: d.day,
        }
    }
}

impl From<PyDate> for DateValue {
    fn from(d: PyDate) -> Self {
        Self {
            year: d.year,
            month: d.month,
            day: d.day,
        }
    }
}

/// A wall-clock time with nanosecond precision.
#[pyclass(name = "Time", frozen, get_all)]
#[derive(Clone, Copy)]
struct PyTime {
    hour: i32,
    minute: i32,
    second: i32,
    nanosecond: i32,
}

#[pymethods]
impl PyTime {
    fn __repr__(&self) -> String {
        let t = TimeValue {
            hour: self.hour,
            minute: self.minute,
            second: self.second,
            nanosecond: self.nanosecond,
        };
        format!("Time({})", t)
    }
}

impl From<TimeValue> for PyTime {
    fn from(t: TimeValue) -> Self {
        Self {
            hour: t.hour,
            minute: t.minute,
            second: t.second,
            nanosecond: t.nanosecond,
        }
    }
}

/// A date-time. `has_offset` False means local time with no known offset.
#[pyclass(name = "DateTime", frozen, get_all)]
#[derive(Clone, Copy)]
struct PyDateTime {
    date: PyDate,
    time: PyTime,
    has_offset: bool,
    offset_minutes: i32,
}

#[pymethods]
impl PyDateTime {
    fn __repr__(&self) -> String {
        format!("DateTime({})", self.value())
    }
}

impl PyDateTime {
    fn value(&self) -> DateTimeValue {
        DateTimeValue {
            date: self.date.into(),
            time: TimeValue {
                hour: self.time.hour,
                minute: self.time.minute,
                second: self.time.second,
                nanosecond: self.time.nanosecond,
            },
            has_offset: self.has_offset,
            offset_minutes: self.offset_minutes,
        }
    }
}

impl From<DateTimeValue> for PyDateTime {
    fn from(dt: DateTimeValue) -> Self {
        Self {
            date: dt.date.into(),
            time: dt.time.into(),
            has_offset: dt.has_offset,
            offset_minutes: dt.offset_minutes,
        }
    }
}

/// The first grammar failure in a document. `line` and `column` are 1-based.
#[pyclass(name = "ParseError", frozen, get_all)]
#[derive(Clone)]
struct PyParseError {
    description: String,
    line: usize,
    column: usize,
}

#[pymethods]
impl PyParseError {
    fn __repr__(&self) -> String {
        format!(
            "ParseError(line={}, column={}, description={:?})",
            self.line, self.column, self.description
        )
    }
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// One TOML value. Accessors never raise: reading through the wrong
/// accessor returns a zero/empty default, and out-of-range indices return an
/// empty node or an empty string.
#[pyclass(name = "Node", frozen)]
#[derive(Clone)]
struct PyNode {
    inner: tomlnode_core::Node,
}

impl From<tomlnode_core::Node> for PyNode {
    fn from(inner: tomlnode_core::Node) -> Self {
        Self { inner }
    }
}

#[pymethods]
impl PyNode {
    /// Stable tag number, comparable with the module's `NODE_*` constants.
    fn get_type(&self) -> i32 {
        self.inner.get_type() as i32
    }

    /// Tag name, e.g. "integer" or "date-time".
    fn type_name(&self) -> &'static str {
        self.inner.get_type().as_str()
    }

    fn get_string(&self) -> String {
        self.inner.get_string().to_string()
    }

    fn get_integer(&self) -> i64 {
        self.inner.get_integer()
    }

    fn get_float(&self) -> f64 {
        self.inner.get_float()
    }

    fn get_boolean(&self) -> bool {
        self.inner.get_boolean()
    }

    fn get_date(&self) -> PyDate {
        self.inner.get_date().into()
    }

    fn get_time(&self) -> PyTime {
        self.inner.get_time().into()
    }

    fn get_date_time(&self) -> PyDateTime {
        self.inner.get_date_time().into()
    }

    fn get_array_size(&self) -> usize {
        self.inner.get_array_size()
    }

    fn get_array_element(&self, index: usize) -> PyNode {
        self.inner.get_array_element(index).clone().into()
    }

    fn get_table_size(&self) -> usize {
        self.inner.get_table_size()
    }

    fn get_table_key(&self, index: usize) -> String {
        self.inner.get_table_key(index).to_string()
    }

    fn get_table_value(&self, key: &str) -> Option<PyNode> {
        self.inner.get_table_value(key).cloned().map(PyNode::from)
    }

    /// Walk nested tables along a dotted path such as "server.port".
    fn get_path(&self, path: &str) -> Option<PyNode> {
        self.inner.get_path(path).cloned().map(PyNode::from)
    }

    /// Serialize this subtree as JSON; `tagged` selects the toml-test shape.
    #[pyo3(signature = (tagged=false))]
    fn to_json(&self, tagged: bool) -> PyResult<String> {
        node_to_json(&self.inner, tagged)
    }

    fn __len__(&self) -> usize {
        match self.inner.get_type() {
            NodeType::Array => self.inner.get_array_size(),
            NodeType::Table => self.inner.get_table_size(),
            _ => 0,
        }
    }

    fn __repr__(&self) -> String {
        format!("Node(type={})", self.inner.get_type().as_str())
    }
}

// ---------------------------------------------------------------------------
// Parse result
// ---------------------------------------------------------------------------

/// Outcome of `parse`. Exactly one of `success` / `error` is meaningful.
#[pyclass(name = "ParseResult", frozen)]
struct PyParseResult {
    inner: tomlnode_core::ParseResult,
}

#[pymethods]
impl PyParseResult {
    #[getter]
    fn success(&self) -> bool {
        self.inner.success()
    }

    #[getter]
    fn error(&self) -> Option<PyParseError> {
        self.inner.error().map(|e| PyParseError {
            description: e.description.clone(),
            line: e.line,
            column: e.column,
        })
    }

    /// The document table; an empty node when parsing failed.
    #[getter]
    fn root(&self) -> PyNode {
        self.inner.root().clone().into()
    }

    fn __bool__(&self) -> bool {
        self.inner.success()
    }
}

// ---------------------------------------------------------------------------
// Module functions
// ---------------------------------------------------------------------------

/// Parse a TOML string.
///
/// Args:
///     text: TOML source text.
///
/// Returns:
///     A ParseResult. Grammar errors are reported through `result.error`
///     rather than raised.
#[pyfunction]
fn parse(text: &str) -> PyParseResult {
    PyParseResult {
        inner: tomlnode_core::parse(text),
    }
}

/// Parse a TOML string and return the tree as JSON.
///
/// Args:
///     text: TOML source text.
///     tagged: Emit the toml-test `{"type", "value"}` encoding.
///
/// Returns:
///     The JSON string.
///
/// Raises:
///     ValueError: If the input is not valid TOML.
#[pyfunction]
#[pyo3(signature = (text, tagged=false))]
fn parse_to_json(text: &str, tagged: bool) -> PyResult<String> {
    let root = tomlnode_core::parse(text)
        .into_result()
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    node_to_json(&root, tagged)
}

fn node_to_json(node: &tomlnode_core::Node, tagged: bool) -> PyResult<String> {
    let json = if tagged {
        serde_json::to_string(&tomlnode_core::to_tagged_json(node))
    } else {
        serde_json::to_string(node)
    };
    json.map_err(|e| PyValueError::new_err(e.to_string()))
}

/// The `tomlnode` Python module, implemented in Rust via PyO3.
#[pymodule]
fn tomlnode(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(parse, m)?)?;
    m.add_function(wrap_pyfunction!(parse_to_json, m)?)?;
    m.add_class::<PyNode>()?;
    m.add_class::<PyParseResult>()?;
    m.add_class::<PyParseError>()?;
    m.add_class::<PyDate>()?;
    m.add_class::<PyTime>()?;
    m.add_class::<PyDateTime>()?;

    for tag in [
        NodeType::None,
        NodeType::String,
        NodeType::Integer,
        NodeType::Float,
        NodeType::Boolean,
        NodeType::Date,
        NodeType::Time,
        NodeType::DateTime,
        NodeType::Array,
        NodeType::Table,
    ] {
        let name = format!("NODE_{}", tag.as_str().replace('-', "_").to_uppercase());
        m.add(name.as_str(), tag as i32)?;
    }
    Ok(())
}
