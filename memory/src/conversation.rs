//! # Conversation Memory
//!
//! [`ConversationMemory`] keeps every message in insertion order until [`clear`] is called.
//! The configured `window_size` only affects retrieval, never storage.
//!
//! ## Views
//!
//! | Method | Window | Truncated | Ownership |
//! |--------|--------|-----------|-----------|
//! | [`all`] | none | no | live `&mut Vec<Message>` |
//! | [`messages`] | none | no | `&[Message]` |
//! | [`to_json`] | none | no | owned snapshot |
//! | [`to_chat_format`] | none | no | owned, optional leading system entry |
//! | [`to_structured`] | signed | no | owned |
//! | [`get_window`] | signed | assistant answers only | owned display strings |
//!
//! [`clear`]: ConversationMemory::clear
//! [`all`]: ConversationMemory::all
//! [`messages`]: ConversationMemory::messages
//! [`to_json`]: ConversationMemory::to_json
//! [`to_chat_format`]: ConversationMemory::to_chat_format
//! [`to_structured`]: ConversationMemory::to_structured
//! [`get_window`]: ConversationMemory::get_window

use memory_core::{
    display_text, is_truthy, select_window, truncate, ChatMessage, ExportedMessage, MemoryError,
    Message, MessageRole, Result, DEFAULT_TRUNCATE_LENGTH,
};
use serde_json::Value;
use tracing::trace;

use crate::config::MemoryConfig;

/// Window used when none is configured: the last message only.
pub const DEFAULT_WINDOW_SIZE: i64 = 1;

/// Display header for user messages.
pub const QUERY_HEADER: &str = "### QUERY";

/// Display header for assistant messages.
pub const ANSWER_HEADER: &str = "### ANSWER";

/// Append-only, role-tagged message log with a signed default retrieval window.
///
/// Not internally synchronized; wrap it in a `Mutex` when shared between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationMemory {
    messages: Vec<Message>,
    window_size: i64,
    system_context: Value,
}

impl Default for ConversationMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationMemory {
    /// Creates an empty memory with window size 1 and no system context.
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            window_size: DEFAULT_WINDOW_SIZE,
            system_context: Value::Null,
        }
    }

    pub fn from_config(config: &MemoryConfig) -> Self {
        let memory = Self::new().with_window_size(config.window_size());
        match config.system_context() {
            Some(context) => memory.with_system_context(context),
            None => memory,
        }
    }

    /// Sets the default window. Positive, zero and negative values are all valid.
    pub fn with_window_size(mut self, window_size: i64) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_system_context(mut self, system_context: impl Into<Value>) -> Self {
        self.system_context = system_context.into();
        self
    }

    pub fn window_size(&self) -> i64 {
        self.window_size
    }

    pub fn system_context(&self) -> &Value {
        &self.system_context
    }

    /// Replaces the system context; the next [`to_chat_format`](Self::to_chat_format) call sees it.
    pub fn set_system_context(&mut self, system_context: impl Into<Value>) {
        self.system_context = system_context.into();
    }

    /// Appends a message. `is_user` is stored as given and read by truthiness.
    pub fn add(&mut self, content: impl Into<Value>, is_user: impl Into<Value>) {
        self.messages.push(Message::new(content, is_user));
        trace!(count = self.messages.len(), "ConversationMemory: message added");
    }

    /// Removes every message. Window size and system context are kept.
    pub fn clear(&mut self) {
        self.messages.clear();
        trace!("ConversationMemory: cleared");
    }

    pub fn count(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Most recently added message.
    pub fn last(&self) -> Result<&Message> {
        self.messages.last().ok_or(MemoryError::Empty)
    }

    /// Live view of the stored messages. Changes made through it change the memory.
    pub fn all(&mut self) -> &mut Vec<Message> {
        &mut self.messages
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Role/content pairs for the window, content untruncated.
    pub fn to_structured(&self, limit: Option<i64>) -> Vec<ChatMessage> {
        self.window(limit)
            .iter()
            .map(Message::to_chat_message)
            .collect()
    }

    /// Chat request messages: optional system entry, then every stored message untruncated.
    pub fn to_chat_format(&self) -> Vec<ChatMessage> {
        let mut out = Vec::with_capacity(self.messages.len() + 1);
        if is_truthy(&self.system_context) {
            out.push(ChatMessage::system(self.system_context.clone()));
        }
        out.extend(self.messages.iter().map(Message::to_chat_message));
        out
    }

    /// Display strings for the window.
    ///
    /// Users render as `"### QUERY\n <content>"`, assistants as `"### ANSWER\n <content>"` with
    /// the content truncated to [`DEFAULT_TRUNCATE_LENGTH`]. Fails when an over-length
    /// assistant answer cannot be sliced.
    pub fn get_window(&self, limit: Option<i64>) -> Result<Vec<String>> {
        self.window(limit).iter().map(format_message).collect()
    }

    /// Window joined with newlines; empty string for an empty window.
    pub fn get_conversation(&self, limit: Option<i64>) -> Result<String> {
        Ok(self.get_window(limit)?.join("\n"))
    }

    /// Like [`get_conversation`](Self::get_conversation) without the window's final message.
    pub fn get_previous_conversation(&self, limit: Option<i64>) -> Result<String> {
        let mut window = self.get_window(limit)?;
        window.pop();
        Ok(window.join("\n"))
    }

    /// Last entry of the default window, or an empty string when that window is empty.
    pub fn get_last_message(&self) -> Result<String> {
        match self.window(None).last() {
            Some(message) => format_message(message),
            None => Ok(String::new()),
        }
    }

    /// Owned `{role, message}` snapshot of every stored message.
    pub fn to_json(&self) -> Vec<ExportedMessage> {
        self.messages.iter().map(Message::to_exported).collect()
    }

    /// Appends the entries of a [`to_json`](Self::to_json) snapshot.
    ///
    /// A `system` entry fails the whole restore and nothing is appended.
    pub fn restore(&mut self, snapshot: Vec<ExportedMessage>) -> Result<()> {
        if let Some(entry) = snapshot.iter().find(|e| e.role == MessageRole::System) {
            return Err(MemoryError::UnexpectedRole(entry.role));
        }
        let restored = snapshot.len();
        self.messages.extend(
            snapshot
                .into_iter()
                .map(|entry| Message::new(entry.message, entry.role == MessageRole::User)),
        );
        trace!(restored, count = self.messages.len(), "ConversationMemory: snapshot restored");
        Ok(())
    }

    fn window(&self, limit: Option<i64>) -> &[Message] {
        select_window(&self.messages, limit.unwrap_or(self.window_size))
    }
}

fn format_message(message: &Message) -> Result<String> {
    if message.is_from_user() {
        Ok(format!("{QUERY_HEADER}\n {}", display_text(&message.content)))
    } else {
        let content = truncate(&message.content, DEFAULT_TRUNCATE_LENGTH)?;
        Ok(format!("{ANSWER_HEADER}\n {}", display_text(&content)))
    }
}

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;
