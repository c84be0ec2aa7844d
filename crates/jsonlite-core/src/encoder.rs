//! Encoder — converts a [`Value`] into extended-escaped JSON text.
//!
//! The output is structurally ordinary JSON, but every string literal goes
//! through the extended escaper, so `,` `[` `]` `{` `}` never appear raw
//! inside one. That property is what [`crate::decode`] relies on.
//!
//! # Example
//! ```
//! use jsonlite_core::{encode, Value};
//!
//! let value = Value::Mapping(vec![
//!     ("name".to_string(), Value::Text("Alice".to_string())),
//!     ("scores".to_string(), Value::Sequence(vec![Value::Int(95), Value::Int(87)])),
//! ]);
//! assert_eq!(encode(&value), r#"{"name":"Alice","scores":[95,87]}"#);
//! ```

use crate::escape::escape;
use crate::types::{looks_numeric, Value};

/// Encode a value as extended-escaped JSON text.
///
/// A `Text` whose content matches the numeric grammar (`"007"`, `"3.14"`)
/// is emitted unquoted and will decode as a number; the wire format carries
/// no type tag that could distinguish the two.
pub fn encode(value: &Value) -> String {
    let mut out = String::new();
    encode_value(value, &mut out);
    out
}

fn encode_value(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Int(n) => out.push_str(&n.to_string()),
        Value::Float(f) => out.push_str(&format_float(*f)),
        Value::Text(s) => {
            if looks_numeric(s) {
                out.push_str(s);
            } else {
                out.push_str(&escape(s));
            }
        }
        Value::Sequence(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                encode_value(item, out);
            }
            out.push(']');
        }
        Value::Mapping(entries) => {
            out.push('{');
            for (i, (key, value)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&escape(key));
                out.push(':');
                encode_value(value, out);
            }
            out.push('}');
        }
    }
}

/// Format a float as a decimal token:
/// - NaN and infinities have no JSON form and become `null`
/// - -0 normalizes to 0
/// - whole-valued floats within i64 range take integer form (2.0 → `2`)
fn format_float(f: f64) -> String {
    if f.is_nan() || f.is_infinite() {
        return "null".to_string();
    }
    let f = if f == 0.0 { 0.0 } else { f };
    if f.fract() == 0.0 && f.abs() < (i64::MAX as f64) {
        return (f as i64).to_string();
    }
    format!("{}", f)
}
