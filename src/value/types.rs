//! Dynamic value model shared by every collection operation.
//!
//! Maps carry values of any shape, so values are a tagged union with
//! explicit integer, float and null variants. Structured records are
//! modelled as an explicit, ordered field list instead of reflection.

use std::collections::{BTreeMap, HashMap};

/// Associative container: unique string keys, unordered iteration
pub type ValueMap = HashMap<String, Value>;

/// Associative container whose iteration yields keys in ascending order
pub type SortedMap = BTreeMap<String, Value>;

/// Lookup table from original key name to replacement key name
pub type KeyMapping = HashMap<String, String>;

/// A dynamically-typed value
///
/// **Public** - input and output shape of the collection operations
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(ValueMap),
    Record(Record),
}

impl Value {
    /// Name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Record(_) => "record",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Numeric magnitude for `Int` and `Float`, `None` for everything else
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<ValueMap> for Value {
    fn from(v: ValueMap) -> Self {
        Value::Map(v)
    }
}

impl From<Record> for Value {
    fn from(v: Record) -> Self {
        Value::Record(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

/// A structured record: named fields in declaration order
///
/// **Public** - the struct branch of key shortening
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, builder style
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Fields in declaration order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Types that can describe themselves as a [`Record`]
///
/// Implementors list their fields explicitly:
///
/// ```
/// use objutils::value::{Record, ToRecord, Value};
///
/// struct Point { x: i64, y: i64 }
///
/// impl ToRecord for Point {
///     fn to_record(&self) -> Record {
///         Record::new().with_field("x", self.x).with_field("y", self.y)
///     }
/// }
///
/// let value = Value::from(Point { x: 1, y: 2 }.to_record());
/// assert_eq!(value.kind(), "record");
/// ```
pub trait ToRecord {
    fn to_record(&self) -> Record;
}

/// Build a [`ValueMap`] from `(key, value)` pairs
///
/// **Public** - convenience for literals in callers and tests
pub fn map_of<K, V, I>(entries: I) -> ValueMap
where
    K: Into<String>,
    V: Into<Value>,
    I: IntoIterator<Item = (K, V)>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
