//! Adapters at the edges of the value model.
//!
//! Two concerns live here, both about getting foreign shapes into and out of
//! [`Value`] without the core codec ever inspecting them:
//!
//! - [`classify`] — the sequence-vs-mapping heuristic for generic ordered
//!   containers whose keys may be integers or text (the shape dynamic
//!   languages hand to an encoder). Applied once, before encoding; the
//!   [`Value`] model itself never looks at key shapes.
//! - `From` conversions to and from [`serde_json::Value`] for callers that
//!   interoperate with standard JSON. These are edge adapters only:
//!   [`crate::decode`] never delegates to serde_json.

use crate::types::Value;

/// A key in a generic ordered container: positional or named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Index(usize),
    Name(String),
}

impl Key {
    fn into_name(self) -> String {
        match self {
            Key::Index(i) => i.to_string(),
            Key::Name(name) => name,
        }
    }
}

/// Classify a generic container as a [`Value::Sequence`] or
/// [`Value::Mapping`].
///
/// The container is a sequence iff its keys are exactly `Index(0..n)` in
/// ascending order; an empty container is a sequence. Anything else — keys
/// out of order, gaps, or any named key — is a mapping, with positional keys
/// rendered as their decimal text.
///
/// # Example
/// ```
/// use jsonlite_core::{classify, Key, Value};
///
/// let seq = classify(vec![
///     (Key::Index(0), Value::Int(10)),
///     (Key::Index(1), Value::Int(20)),
/// ]);
/// assert_eq!(seq, Value::Sequence(vec![Value::Int(10), Value::Int(20)]));
///
/// let map = classify(vec![
///     (Key::Index(1), Value::Int(10)),
///     (Key::Index(0), Value::Int(20)),
/// ]);
/// assert!(matches!(map, Value::Mapping(_)));
/// ```
pub fn classify(entries: Vec<(Key, Value)>) -> Value {
    let sequential = entries
        .iter()
        .enumerate()
        .all(|(position, (key, _))| *key == Key::Index(position));
    if sequential {
        Value::Sequence(entries.into_iter().map(|(_, value)| value).collect())
    } else {
        Value::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key.into_name(), value))
                .collect(),
        )
    }
}

impl From<serde_json::Value> for Value {
    /// Convert a standard-JSON tree into the jsonlite model. Numbers keep
    /// the integer/float split where serde_json has one; u64 values beyond
    /// i64 range go through f64.
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&Value> for serde_json::Value {
    /// Convert back to a standard-JSON tree. Non-finite floats have no JSON
    /// form and become null, matching the encoder.
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(n) => serde_json::Value::Number((*n).into()),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::Sequence(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            Value::Mapping(entries) => {
                let mut map = serde_json::Map::new();
                for (key, value) in entries {
                    map.insert(key.clone(), serde_json::Value::from(value));
                }
                serde_json::Value::Object(map)
            }
        }
    }
}
