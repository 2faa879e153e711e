//! Result formatting for console display.

use minijs_types::{js_number_to_string, Value};

/// The fallback shown when structural serialization itself fails.
const SERIALIZATION_FALLBACK: &str = "[Object object]";

/// Render an evaluation result as display text:
///
/// - `null` / `undefined` → those literal words
/// - strings → wrapped in double quotes, no internal escaping
/// - arrays and objects → deterministic 2-space-indented JSON (with
///   `[Object object]` as the fallback if serialization fails)
/// - numbers and booleans → their JavaScript textual representation
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Undefined => "undefined".to_string(),
        Value::String(s) => format!("\"{s}\""),
        Value::Array(_) | Value::Object(_) => serde_json::to_string_pretty(value)
            .unwrap_or_else(|_| SERIALIZATION_FALLBACK.to_string()),
        Value::Number(n) => js_number_to_string(*n),
        Value::Bool(b) => b.to_string(),
    }
}
