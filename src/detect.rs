/// Classification of an export's root JSON shape.
///
/// Strategy:
///   1. A root array is a list of relationship records
///   2. A root object holding a conventional array key (see
///      `conventional_keys`) is a list under that key
///   3. Any other root object is scanned field by field
///   4. Scalars are rejected
use serde_json::{Map, Value};

use crate::error::{FollowbackError, Result};
use crate::model::Role;

/// Where the relationship records live inside a document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RootShape<'a> {
    /// The root itself is the record array.
    List(&'a [Value]),
    /// The records sit under a recognised key of the root object.
    Named { key: &'a str, entries: &'a [Value] },
    /// No recognised key; every array-valued field is a candidate.
    Scan(&'a Map<String, Value>),
}

/// Array keys tried on an object root, in priority order.
pub fn conventional_keys(role: Role) -> Vec<String> {
    let mut keys = vec![format!("relationships_{}", role.as_str())];
    for key in [role.as_str(), "followers", "connections", "list"] {
        if !keys.iter().any(|k| k == key) {
            keys.push(key.to_string());
        }
    }
    keys
}

/// Detect the shape of a parsed export.
pub fn detect_shape(root: &Value, role: Role) -> Result<RootShape<'_>> {
    match root {
        Value::Array(entries) => Ok(RootShape::List(entries)),
        Value::Object(fields) => Ok(detect_object(fields, role)),
        other => Err(FollowbackError::UnrecognizedFormat {
            kind: value_kind(other),
        }),
    }
}

fn detect_object(fields: &Map<String, Value>, role: Role) -> RootShape<'_> {
    for key in conventional_keys(role) {
        if let Some((key, Value::Array(entries))) = fields.get_key_value(key.as_str()) {
            return RootShape::Named {
                key: key.as_str(),
                entries,
            };
        }
    }
    RootShape::Scan(fields)
}

/// Human-readable name of a JSON value's type.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
