//! Runtime values produced by the MiniJS evaluator.
//!
//! Semantics follow JavaScript: one `f64` number type, `null` and
//! `undefined` as distinct values, insertion-ordered objects, and the
//! standard ToNumber / ToString coercions used by the operators.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// Largest integer exactly representable in an f64 (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A MiniJS runtime value.
///
/// Object fields preserve insertion order, matching JavaScript object
/// literals; duplicate keys are resolved by the evaluator (last wins)
/// before a `Value::Object` is constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Vec<(String, Value)>),
}

impl Value {
    /// JavaScript truthiness: `false`, `0`, `NaN`, `""`, `null` and
    /// `undefined` are falsy; everything else (including empty arrays
    /// and objects) is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    /// JavaScript ToNumber coercion.
    ///
    /// Arrays and objects go through their string form first, so `[]`
    /// is `0`, `[5]` is `5`, and `{}` is `NaN`.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Undefined => f64::NAN,
            Value::Null => 0.0,
            Value::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Number(n) => *n,
            Value::String(s) => string_to_number(s),
            Value::Array(_) | Value::Object(_) => string_to_number(&self.to_display_string()),
        }
    }

    /// JavaScript ToString coercion — the `String(v)` form.
    ///
    /// Arrays join their elements with commas (`null`/`undefined`
    /// elements contribute an empty string); objects stringify as
    /// `[object Object]`.
    pub fn to_display_string(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => js_number_to_string(*n),
            Value::String(s) => s.clone(),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::Undefined | Value::Null => String::new(),
                    other => other.to_display_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
            Value::Object(_) => "[object Object]".to_string(),
        }
    }

    /// Returns `true` for `null` or `undefined`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }
}

/// ToNumber for string values: whitespace-only is `0`, `Infinity`
/// spellings are recognised, anything unparseable is `NaN`.
fn string_to_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ => trimmed.parse::<f64>().unwrap_or(f64::NAN),
    }
}

/// Format an `f64` the way JavaScript's `String(n)` does for the values
/// this engine produces: integral values print without a decimal point,
/// `-0` prints as `0`, and the non-finite values print as `NaN`,
/// `Infinity` and `-Infinity`.
pub fn js_number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    if n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER {
        return format!("{}", n as i64);
    }
    format!("{n}")
}

/// Serialization mirrors `JSON.stringify`: non-finite numbers and
/// `undefined` array elements become JSON `null`, and object properties
/// holding `undefined` are omitted entirely.
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Undefined | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) if !n.is_finite() => serializer.serialize_unit(),
            Value::Number(n) if n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(entries) => {
                let mut map = serializer.serialize_map(None)?;
                for (key, value) in entries {
                    if matches!(value, Value::Undefined) {
                        continue;
                    }
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}
