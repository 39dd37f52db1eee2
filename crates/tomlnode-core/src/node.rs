//! The flat tagged-value tree handed to callers.
//!
//! A [`Node`] holds exactly one TOML value kind. Its payload is private:
//! nodes are built only through the `make_*` factories and read only through
//! total accessors. Reading a payload through the wrong accessor returns a
//! zero/empty default instead of failing, so a consumer on the far side of a
//! language boundary can walk the tree without ever hitting an error path.
//!
//! Containers own their children. `Clone` deep-copies the whole subtree,
//! which is cheap for configuration-sized documents; callers holding large
//! trees should move them or borrow through [`Node::elements`] and
//! [`Node::entries`].

use serde::Serialize;

/// Discriminant of a [`Node`].
///
/// The numeric values are stable and are what binding crates hand across the
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
#[repr(i32)]
pub enum NodeType {
    #[default]
    None = 0,
    String = 1,
    Integer = 2,
    Float = 3,
    Boolean = 4,
    Date = 5,
    Time = 6,
    DateTime = 7,
    Array = 8,
    Table = 9,
}

impl NodeType {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeType::None => "none",
            NodeType::String => "string",
            NodeType::Integer => "integer",
            NodeType::Float => "float",
            NodeType::Boolean => "boolean",
            NodeType::Date => "date",
            NodeType::Time => "time",
            NodeType::DateTime => "date-time",
            NodeType::Array => "array",
            NodeType::Table => "table",
        }
    }
}

/// A calendar date. Not re-validated; values are trusted from the grammar engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateValue {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

/// A wall-clock time with nanosecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TimeValue {
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
    pub nanosecond: i32,
}

/// A date and time, optionally pinned to a fixed UTC offset.
///
/// `has_offset == false` means a local date-time with no known offset, which
/// is distinct from an explicit `+00:00`. `offset_minutes` is only meaningful
/// when `has_offset` is true and is zero otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateTimeValue {
    pub date: DateValue,
    pub time: TimeValue,
    pub has_offset: bool,
    pub offset_minutes: i32,
}

/// One TOML value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    payload: Payload,
}

#[derive(Debug, Clone, Default, PartialEq)]
enum Payload {
    #[default]
    None,
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Date(DateValue),
    Time(TimeValue),
    DateTime(DateTimeValue),
    Array(Vec<Node>),
    /// Key/value pairs in insertion order.
    Table(Vec<(String, Node)>),
}

static EMPTY: Node = Node {
    payload: Payload::None,
};

impl Node {
    // ------------------------------------------------------------------
    // Factories
    // ------------------------------------------------------------------

    /// A string node.
    pub fn make_string(value: impl Into<String>) -> Self {
        Self::from_payload(Payload::String(value.into()))
    }

    /// A 64-bit signed integer node.
    pub fn make_integer(value: i64) -> Self {
        Self::from_payload(Payload::Integer(value))
    }

    /// A float node. Non-finite values (`inf`, `-inf`, `nan`) are kept as is.
    pub fn make_float(value: f64) -> Self {
        Self::from_payload(Payload::Float(value))
    }

    /// A boolean node.
    pub fn make_boolean(value: bool) -> Self {
        Self::from_payload(Payload::Boolean(value))
    }

    /// A local date node.
    pub fn make_date(value: DateValue) -> Self {
        Self::from_payload(Payload::Date(value))
    }

    /// A local time node.
    pub fn make_time(value: TimeValue) -> Self {
        Self::from_payload(Payload::Time(value))
    }

    /// A date-time node, with or without an offset.
    pub fn make_date_time(value: DateTimeValue) -> Self {
        Self::from_payload(Payload::DateTime(value))
    }

    /// An array node; elements may mix types.
    pub fn make_array(elements: Vec<Node>) -> Self {
        Self::from_payload(Payload::Array(elements))
    }

    /// Build a table from parallel key and value sequences.
    ///
    /// Keys are expected to be unique; lookups return the first match if they
    /// are not. When the sequences differ in length only the paired prefix is
    /// kept.
    pub fn make_table(keys: Vec<String>, values: Vec<Node>) -> Self {
        Self::from_payload(Payload::Table(keys.into_iter().zip(values).collect()))
    }

    fn from_payload(payload: Payload) -> Self {
        Self { payload }
    }

    // ------------------------------------------------------------------
    // Scalar accessors
    // ------------------------------------------------------------------

    /// The kind of value held.
    pub fn get_type(&self) -> NodeType {
        match self.payload {
            Payload::None => NodeType::None,
            Payload::String(_) => NodeType::String,
            Payload::Integer(_) => NodeType::Integer,
            Payload::Float(_) => NodeType::Float,
            Payload::Boolean(_) => NodeType::Boolean,
            Payload::Date(_) => NodeType::Date,
            Payload::Time(_) => NodeType::Time,
            Payload::DateTime(_) => NodeType::DateTime,
            Payload::Array(_) => NodeType::Array,
            Payload::Table(_) => NodeType::Table,
        }
    }

    /// `true` for the empty node returned by failed lookups.
    pub fn is_none(&self) -> bool {
        matches!(self.payload, Payload::None)
    }

    /// The string value, or `""` if this is not a string.
    pub fn get_string(&self) -> &str {
        match &self.payload {
            Payload::String(s) => s,
            _ => "",
        }
    }

    /// The integer value, or `0` if this is not an integer.
    pub fn get_integer(&self) -> i64 {
        match self.payload {
            Payload::Integer(i) => i,
            _ => 0,
        }
    }

    /// The float value, or `0.0` if this is not a float.
    pub fn get_float(&self) -> f64 {
        match self.payload {
            Payload::Float(f) => f,
            _ => 0.0,
        }
    }

    /// The boolean value, or `false` if this is not a boolean.
    pub fn get_boolean(&self) -> bool {
        match self.payload {
            Payload::Boolean(b) => b,
            _ => false,
        }
    }

    /// The date, or the all-zero date if this is not a date.
    pub fn get_date(&self) -> DateValue {
        match self.payload {
            Payload::Date(d) => d,
            _ => DateValue::default(),
        }
    }

    /// The time, or the all-zero time if this is not a time.
    pub fn get_time(&self) -> TimeValue {
        match self.payload {
            Payload::Time(t) => t,
            _ => TimeValue::default(),
        }
    }

    /// The date-time, or the all-zero record (no offset) if this is not a
    /// date-time.
    pub fn get_date_time(&self) -> DateTimeValue {
        match self.payload {
            Payload::DateTime(dt) => dt,
            _ => DateTimeValue::default(),
        }
    }

    // ------------------------------------------------------------------
    // Array access
    // ------------------------------------------------------------------

    /// Number of elements; zero for anything that is not an array.
    pub fn get_array_size(&self) -> usize {
        self.elements().len()
    }

    /// Element at `index`, or the empty node when out of range.
    pub fn get_array_element(&self, index: usize) -> &Node {
        self.elements().get(index).unwrap_or(&EMPTY)
    }

    /// Borrowed view of the array elements; empty for non-arrays.
    pub fn elements(&self) -> &[Node] {
        match &self.payload {
            Payload::Array(elements) => elements,
            _ => &[],
        }
    }

    // ------------------------------------------------------------------
    // Table access
    // ------------------------------------------------------------------

    /// Number of keys; zero for anything that is not a table.
    pub fn get_table_size(&self) -> usize {
        self.table_pairs().len()
    }

    /// Key at position `index` in insertion order, or `""` when out of range.
    pub fn get_table_key(&self, index: usize) -> &str {
        self.table_pairs()
            .get(index)
            .map_or("", |(key, _)| key.as_str())
    }

    /// Value stored under `key`.
    ///
    /// This is a linear scan over the keys in insertion order. Configuration
    /// tables are small enough that this beats building an index, but very
    /// wide tables (thousands of keys) will pay O(n) per lookup.
    pub fn get_table_value(&self, key: &str) -> Option<&Node> {
        self.table_pairs()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Borrowed iterator over `(key, value)` pairs in insertion order.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = (&str, &Node)> + '_ {
        self.table_pairs().iter().map(|(k, v)| (k.as_str(), v))
    }

    fn table_pairs(&self) -> &[(String, Node)] {
        match &self.payload {
            Payload::Table(pairs) => pairs,
            _ => &[],
        }
    }
}
