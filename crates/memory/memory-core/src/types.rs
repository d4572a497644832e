//! # Core Types
//!
//! ## Message
//!
//! One stored conversation turn. Both the payload and the `is_user` flag are kept exactly
//! as given; the role is decided by the flag's truthiness each time it is read.
//!
//! ### Fields
//!
//! | Field | Type | Description |
//! |-------|------|-------------|
//! | `content` | `Value` | Raw payload (serialized as `message`) |
//! | `is_user` | `Value` | Role flag; truthy = user query, falsy = assistant answer |
//!
//! ### Example
//!
//! ```rust
//! use memory_core::{Message, MessageRole};
//!
//! let msg = Message::new("How many rows?", true);
//! assert_eq!(msg.role(), MessageRole::User);
//!
//! let answer = Message::new(1024, 0);
//! assert_eq!(answer.role(), MessageRole::Assistant);
//! ```
//!
//! ## ExportedMessage
//!
//! Snapshot entry produced by `to_json()`: `{"role": "user" | "assistant", "message": ...}`.

use prompt::{ChatMessage, MessageRole};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value::is_truthy;

/// A single turn in the conversation history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// The raw payload, never modified after insertion
    #[serde(rename = "message")]
    pub content: Value,
    /// Role flag as supplied by the caller
    pub is_user: Value,
}

impl Message {
    pub fn new(content: impl Into<Value>, is_user: impl Into<Value>) -> Self {
        Self {
            content: content.into(),
            is_user: is_user.into(),
        }
    }

    /// True when the role flag is truthy.
    pub fn is_from_user(&self) -> bool {
        is_truthy(&self.is_user)
    }

    pub fn role(&self) -> MessageRole {
        if self.is_from_user() {
            MessageRole::User
        } else {
            MessageRole::Assistant
        }
    }

    /// Role/content pair with the untruncated payload.
    pub fn to_chat_message(&self) -> ChatMessage {
        ChatMessage::new(self.role(), self.content.clone())
    }

    pub fn to_exported(&self) -> ExportedMessage {
        ExportedMessage {
            role: self.role(),
            message: self.content.clone(),
        }
    }
}

/// Export/snapshot shape of a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedMessage {
    pub role: MessageRole,
    pub message: Value,
}

impl ExportedMessage {
    pub fn new(role: MessageRole, message: impl Into<Value>) -> Self {
        Self {
            role,
            message: message.into(),
        }
    }
}
