//! Conversions between [`Value`] and `serde_json::Value`.

use super::types::{Value, ValueMap};
use serde_json::{Map, Number};

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => from_number(&n),
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => Value::Map(object_to_map(obj)),
        }
    }
}

/// Integers that fit in i64 stay integers; everything else becomes a float
fn from_number(n: &Number) -> Value {
    match n.as_i64() {
        Some(i) => Value::Int(i),
        None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
    }
}

/// Convert a JSON object into a [`ValueMap`]
///
/// **Public** - used by commands to turn CLI arguments into maps
pub fn object_to_map(obj: Map<String, serde_json::Value>) -> ValueMap {
    obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect()
}

impl Value {
    /// Render as JSON
    ///
    /// Maps and records become objects (keys sorted), non-finite floats
    /// become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::from(*i),
            Value::Float(f) => Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Str(s) => serde_json::Value::String(s.clone()),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Map(map) => serde_json::Value::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
            Value::Record(record) => serde_json::Value::Object(
                record
                    .fields()
                    .map(|(name, v)| (name.to_string(), v.to_json()))
                    .collect(),
            ),
        }
    }
}
