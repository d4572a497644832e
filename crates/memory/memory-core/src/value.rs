//! Payload helpers: truthiness and textual rendering.

use serde_json::Value;
use std::borrow::Cow;

/// Generalized truthiness of a payload or flag.
///
/// Falsy: `null`, `false`, numeric zero, `""`, `[]`, `{}`. Everything else is truthy,
/// including whitespace-only strings.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Default textual form of a payload.
///
/// Strings render as their raw characters; any other value renders as compact JSON.
pub fn display_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
