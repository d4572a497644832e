//! # Memory Crate
//!
//! Conversation memory for LLM prompting: an append-only, role-tagged message log with a
//! signed default retrieval window.
//!
//! ## Quick Start
//!
//! ```rust
//! use memory::ConversationMemory;
//!
//! let mut memory = ConversationMemory::new()
//!     .with_window_size(2)
//!     .with_system_context("You are a data analyst.");
//!
//! memory.add("Which country has the highest GDP?", true);
//! memory.add("The United States.", false);
//!
//! assert_eq!(
//!     memory.get_conversation(None).unwrap(),
//!     "### QUERY\n Which country has the highest GDP?\n### ANSWER\n The United States."
//! );
//! assert_eq!(memory.to_chat_format().len(), 3);
//! ```
//!
//! ## Modules
//!
//! - [`conversation`] - [`ConversationMemory`]
//! - [`config`] - [`MemoryConfig`] loaded from environment
//!
//! Core payload types, truncation and windowing live in `memory-core` and are re-exported here.
//!
//! ## External Interactions
//!
//! - **Prompt renderers**: read `get_conversation` / `get_window`
//! - **LLM adapters**: read `to_chat_format`, write replies back with `add(reply, false)`
//! - **Export layers**: read `to_json`

pub mod config;
pub mod conversation;

pub use config::MemoryConfig;
pub use conversation::{ConversationMemory, ANSWER_HEADER, DEFAULT_WINDOW_SIZE, QUERY_HEADER};
pub use memory_core::{
    display_text, is_truthy, truncate, ChatMessage, ExportedMessage, MemoryError, Message,
    MessageRole, Result, DEFAULT_TRUNCATE_LENGTH, ELLIPSIS,
};
