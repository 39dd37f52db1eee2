//! Text and JSON renderings of a [`Node`] tree.
//!
//! - `Display` for the date/time payloads, in RFC 3339 form.
//! - `Serialize` for [`Node`]: plain JSON, tables as ordered objects.
//!   JSON has no spelling for `inf`, `-inf` or `nan`, so serde_json writes
//!   those floats as `null`. Use the tagged form when they must survive.
//! - [`to_tagged_json`]: the toml-test encoding, where every scalar carries
//!   its TOML type alongside a string value.

use crate::node::{DateTimeValue, DateValue, Node, NodeType, TimeValue};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value};
use std::fmt;

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;
        if self.nanosecond != 0 {
            let fraction = format!("{:09}", self.nanosecond);
            write!(f, ".{}", fraction.trim_end_matches('0'))?;
        }
        Ok(())
    }
}

impl fmt::Display for DateTimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)?;
        if !self.has_offset {
            return Ok(());
        }
        if self.offset_minutes == 0 {
            return f.write_str("Z");
        }
        let sign = if self.offset_minutes < 0 { '-' } else { '+' };
        let minutes = self.offset_minutes.unsigned_abs();
        write!(f, "{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.get_type() {
            NodeType::None => serializer.serialize_unit(),
            NodeType::String => serializer.serialize_str(self.get_string()),
            NodeType::Integer => serializer.serialize_i64(self.get_integer()),
            NodeType::Float => serializer.serialize_f64(self.get_float()),
            NodeType::Boolean => serializer.serialize_bool(self.get_boolean()),
            NodeType::Date => serializer.collect_str(&self.get_date()),
            NodeType::Time => serializer.collect_str(&self.get_time()),
            NodeType::DateTime => serializer.collect_str(&self.get_date_time()),
            NodeType::Array => {
                let elements = self.elements();
                let mut seq = serializer.serialize_seq(Some(elements.len()))?;
                for element in elements {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            NodeType::Table => {
                let mut map = serializer.serialize_map(Some(self.get_table_size()))?;
                for (key, value) in self.entries() {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

/// Encode a node tree in the toml-test JSON shape.
///
/// ```
/// use tomlnode_core::{parse, to_tagged_json};
///
/// let root = parse("n = 1").into_root();
/// let json = to_tagged_json(&root);
/// assert_eq!(json["n"]["type"], "integer");
/// assert_eq!(json["n"]["value"], "1");
/// ```
pub fn to_tagged_json(node: &Node) -> Value {
    match node.get_type() {
        NodeType::None => Value::Null,
        NodeType::String => tagged("string", node.get_string().to_string()),
        NodeType::Integer => tagged("integer", node.get_integer().to_string()),
        NodeType::Float => tagged("float", format_float(node.get_float())),
        NodeType::Boolean => tagged("bool", node.get_boolean().to_string()),
        NodeType::Date => tagged("date-local", node.get_date().to_string()),
        NodeType::Time => tagged("time-local", node.get_time().to_string()),
        NodeType::DateTime => {
            let dt = node.get_date_time();
            let kind = if dt.has_offset {
                "datetime"
            } else {
                "datetime-local"
            };
            tagged(kind, dt.to_string())
        }
        NodeType::Array => Value::Array(node.elements().iter().map(to_tagged_json).collect()),
        NodeType::Table => {
            let map: Map<String, Value> = node
                .entries()
                .map(|(key, value)| (key.to_string(), to_tagged_json(value)))
                .collect();
            Value::Object(map)
        }
    }
}

fn tagged(kind: &str, value: String) -> Value {
    json!({ "type": kind, "value": value })
}

fn format_float(f: f64) -> String {
    if f.is_nan() {
        "nan".to_string()
    } else if f.is_infinite() {
        let spelled = if f.is_sign_negative() { "-inf" } else { "inf" };
        spelled.to_string()
    } else {
        format!("{:?}", f)
    }
}
