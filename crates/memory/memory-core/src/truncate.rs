//! Display-only truncation of message payloads.
//!
//! Length is measured on the textual form ([`display_text`]) in `char`s. A value whose
//! length does not exceed the limit comes back unchanged, keeping its type. Longer values
//! are cut to their first `max_length` elements followed by [`ELLIPSIS`]:
//!
//! - strings are cut by characters
//! - arrays are cut by elements and the prefix is rendered as JSON text
//! - anything else cannot be sliced and fails with [`MemoryError::Untruncatable`]

use serde_json::Value;
use std::borrow::Cow;

use crate::error::{MemoryError, Result};
use crate::value::{display_text, kind_name};

/// Default maximum length used when formatting assistant answers for display.
pub const DEFAULT_TRUNCATE_LENGTH: usize = 100;

/// Suffix appended to truncated payloads.
pub const ELLIPSIS: &str = " ...";

pub fn truncate(value: &Value, max_length: usize) -> Result<Cow<'_, Value>> {
    let length = display_text(value).chars().count();
    if length <= max_length {
        return Ok(Cow::Borrowed(value));
    }

    let prefix = match value {
        Value::String(s) => s.chars().take(max_length).collect::<String>(),
        Value::Array(items) => {
            Value::Array(items.iter().take(max_length).cloned().collect()).to_string()
        }
        other => {
            return Err(MemoryError::Untruncatable {
                kind: kind_name(other),
                length,
                max_length,
            })
        }
    };

    Ok(Cow::Owned(Value::String(format!("{prefix}{ELLIPSIS}"))))
}

#[cfg(test)]
#[path = "truncate_test.rs"]
mod truncate_test;
