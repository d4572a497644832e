//! # memory-core
//!
//! Core types shared by conversation memory implementations:
//!
//! - [`Message`] / [`ExportedMessage`]: stored turn and its `{role, message}` export shape
//! - [`is_truthy`] / [`display_text`]: presence test and textual rendering of payloads
//! - [`truncate`]: display-only shortening of long payloads
//! - [`select_window`]: signed window over an ordered slice
//! - [`MemoryError`] / [`Result`]
//!
//! Payloads are [`serde_json::Value`], so a message may carry a string, number, boolean,
//! sequence, object or nothing at all.

pub mod error;
pub mod truncate;
pub mod types;
pub mod value;
pub mod window;

pub use error::{MemoryError, Result};
pub use prompt::{ChatMessage, MessageRole};
pub use truncate::{truncate, DEFAULT_TRUNCATE_LENGTH, ELLIPSIS};
pub use types::{ExportedMessage, Message};
pub use value::{display_text, is_truthy, kind_name};
pub use window::{parse_limit, select_window};
