//! Native parse tree → [`Node`] conversion.
//!
//! A depth-first walk with one case per native value kind. Conversion is
//! total: every input produces a node, and any kind the walk does not
//! recognise becomes [`NodeType::None`](crate::NodeType::None).

use crate::node::{DateTimeValue, DateValue, Node, TimeValue};
use toml::value::{Array, Date, Datetime, Offset, Time};
use toml::{Table, Value};

/// Convert a native table, keeping the engine's iteration order.
pub fn convert_table(table: &Table) -> Node {
    let mut keys = Vec::with_capacity(table.len());
    let mut values = Vec::with_capacity(table.len());

    for (key, value) in table {
        keys.push(key.clone());
        values.push(convert_value(value));
    }

    tracing::trace!(keys = keys.len(), "converted table");
    Node::make_table(keys, values)
}

/// Convert a single native value and everything beneath it.
pub fn convert_value(value: &Value) -> Node {
    match value {
        Value::String(s) => Node::make_string(s.as_str()),
        Value::Integer(i) => Node::make_integer(*i),
        Value::Float(f) => Node::make_float(*f),
        Value::Boolean(b) => Node::make_boolean(*b),
        Value::Datetime(dt) => convert_datetime(dt),
        Value::Array(arr) => convert_array(arr),
        Value::Table(table) => convert_table(table),
    }
}

/// Elements are visited by index in source order. An index that yields no
/// element is skipped rather than reported.
fn convert_array(arr: &Array) -> Node {
    let elements: Vec<Node> = (0..arr.len())
        .filter_map(|i| arr.get(i))
        .map(convert_value)
        .collect();

    tracing::trace!(elements = elements.len(), "converted array");
    Node::make_array(elements)
}

/// The engine folds offset date-times, local date-times, local dates and
/// local times into one type; which parts are present decides the tag.
fn convert_datetime(dt: &Datetime) -> Node {
    match (dt.date, dt.time) {
        (Some(date), Some(time)) => {
            let offset_minutes = dt.offset.map(offset_minutes);
            Node::make_date_time(DateTimeValue {
                date: convert_date(date),
                time: convert_time(time),
                has_offset: offset_minutes.is_some(),
                offset_minutes: offset_minutes.unwrap_or(0),
            })
        }
        (Some(date), None) => Node::make_date(convert_date(date)),
        (None, Some(time)) => Node::make_time(convert_time(time)),
        (None, None) => Node::default(),
    }
}

fn convert_date(date: Date) -> DateValue {
    DateValue {
        year: i32::from(date.year),
        month: i32::from(date.month),
        day: i32::from(date.day),
    }
}

fn convert_time(time: Time) -> TimeValue {
    TimeValue {
        hour: i32::from(time.hour),
        minute: i32::from(time.minute),
        second: i32::from(time.second),
        // Sub-second precision never exceeds 999_999_999.
        nanosecond: time.nanosecond as i32,
    }
}

fn offset_minutes(offset: Offset) -> i32 {
    match offset {
        Offset::Z => 0,
        Offset::Custom { minutes } => i32::from(minutes),
    }
}
