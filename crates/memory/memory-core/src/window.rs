//! Signed window selection.
//!
//! | `limit` | Selected |
//! |---------|----------|
//! | `n > 0` | last `n` items (all of them if fewer) |
//! | `0` | every item |
//! | `n < 0` | items from index `|n|` to the end (empty if `|n| >= len`) |

use serde_json::Value;

use crate::error::{MemoryError, Result};

pub fn select_window<T>(items: &[T], limit: i64) -> &[T] {
    let len = items.len();
    if limit > 0 {
        let take = usize::try_from(limit).map_or(len, |n| n.min(len));
        &items[len - take..]
    } else if limit == 0 {
        items
    } else {
        let skip = usize::try_from(limit.unsigned_abs()).map_or(len, |n| n.min(len));
        &items[skip..]
    }
}

/// Reads a window limit from an untyped value. Only integer-valued numbers are accepted.
pub fn parse_limit(value: &Value) -> Result<i64> {
    value
        .as_i64()
        .ok_or_else(|| MemoryError::InvalidLimit(value.to_string()))
}
