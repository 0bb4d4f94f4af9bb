//! Serialization-safe output values.
//!
//! `serde_json` cannot represent NaN or infinities and silently turns them
//! into `null`, which is indistinguishable from an absent value. Output
//! documents are therefore assembled as [`OutputValue`] trees first and run
//! through [`sanitize`], which swaps every non-finite float for the
//! [`NIL_SENTINEL`] marker before serialization.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Marker written in place of NaN / ±Infinity.
pub const NIL_SENTINEL: &str = "Nil";

/// A JSON-like document tree that can still hold non-finite floats.
///
/// Maps keep insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<OutputValue>),
    Map(Vec<(String, OutputValue)>),
    /// A value that existed but was not a usable number.
    Nil,
}

impl OutputValue {
    /// Build a map from `(key, value)` pairs, keeping their order.
    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, OutputValue)>,
    {
        OutputValue::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// True when no non-finite float remains anywhere in the tree.
    pub fn is_clean(&self) -> bool {
        match self {
            OutputValue::Float(f) => f.is_finite(),
            OutputValue::List(items) => items.iter().all(OutputValue::is_clean),
            OutputValue::Map(entries) => entries.iter().all(|(_, v)| v.is_clean()),
            _ => true,
        }
    }

    /// Serialize into a `serde_json::Value`, sanitizing first.
    pub fn into_json(self) -> Value {
        match sanitize(self) {
            OutputValue::Null => Value::Null,
            OutputValue::Bool(b) => Value::Bool(b),
            OutputValue::Int(i) => Value::from(i),
            OutputValue::Float(f) => Value::from(f),
            OutputValue::Text(s) => Value::String(s),
            OutputValue::Nil => Value::String(NIL_SENTINEL.to_string()),
            OutputValue::List(items) => {
                Value::Array(items.into_iter().map(OutputValue::into_json).collect())
            }
            OutputValue::Map(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, v.into_json()))
                    .collect(),
            ),
        }
    }
}

/// Replace every NaN / ±Infinity in `value` with [`OutputValue::Nil`].
///
/// Total and idempotent; every other value passes through unchanged.
pub fn sanitize(value: OutputValue) -> OutputValue {
    match value {
        OutputValue::Float(f) if !f.is_finite() => OutputValue::Nil,
        OutputValue::List(items) => OutputValue::List(items.into_iter().map(sanitize).collect()),
        OutputValue::Map(entries) => {
            OutputValue::Map(entries.into_iter().map(|(k, v)| (k, sanitize(v))).collect())
        }
        other => other,
    }
}

impl Serialize for OutputValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            OutputValue::Null => serializer.serialize_unit(),
            OutputValue::Bool(b) => serializer.serialize_bool(*b),
            OutputValue::Int(i) => serializer.serialize_i64(*i),
            OutputValue::Float(f) if f.is_finite() => serializer.serialize_f64(*f),
            OutputValue::Float(_) | OutputValue::Nil => serializer.serialize_str(NIL_SENTINEL),
            OutputValue::Text(s) => serializer.serialize_str(s),
            OutputValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            OutputValue::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl From<i64> for OutputValue {
    fn from(v: i64) -> Self {
        OutputValue::Int(v)
    }
}

impl From<f64> for OutputValue {
    fn from(v: f64) -> Self {
        OutputValue::Float(v)
    }
}

impl From<bool> for OutputValue {
    fn from(v: bool) -> Self {
        OutputValue::Bool(v)
    }
}

impl From<&str> for OutputValue {
    fn from(v: &str) -> Self {
        OutputValue::Text(v.to_string())
    }
}

impl From<String> for OutputValue {
    fn from(v: String) -> Self {
        OutputValue::Text(v)
    }
}

impl<T: Into<OutputValue>> From<Option<T>> for OutputValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(OutputValue::Null)
    }
}

impl<T: Into<OutputValue>> From<Vec<T>> for OutputValue {
    fn from(v: Vec<T>) -> Self {
        OutputValue::List(v.into_iter().map(Into::into).collect())
    }
}
