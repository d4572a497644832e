//! # Prompt
//!
//! Role-tagged chat messages and prompt text built from conversation memory.
//!
//! ## Contents
//!
//! - [`MessageRole`] / [`ChatMessage`]: one element of a chat-style LLM `messages` array.
//!   Content is kept as a raw [`serde_json::Value`] so non-string payloads reach the
//!   adapter untouched.
//! - [`RephraseQueryPrompt`]: asks the model to rephrase a query given dataframe
//!   descriptions and the transcript produced by `ConversationMemory::get_conversation`.
//!
//! ## External interactions
//!
//! - **LLM adapters**: serialize [`ChatMessage`] lists into provider request bodies.
//! - **Prompt renderers**: embed [`RephraseQueryPrompt::render`] output in requests.

mod rephrase;

pub use rephrase::{RephraseQueryPrompt, CONVERSATION_INTRO};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Role of a message, one-to-one with chat API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
    /// Assistant message (API `role: "assistant"`).
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single chat message, one element of a chat API `messages` array.
///
/// Serializes as `{"role": "...", "content": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: Value,
}

impl ChatMessage {
    pub fn new(role: MessageRole, content: impl Into<Value>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<Value>) -> Self {
        Self::new(MessageRole::System, content)
    }

    pub fn user(content: impl Into<Value>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<Value>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}
