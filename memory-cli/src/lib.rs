//! # memory-cli
//!
//! `convo` command: loads a conversation snapshot (the `to_json` export of
//! `ConversationMemory`) and prints its transcript, chat-format messages or rephrase prompt.
//! Config from env (`MEMORY_WINDOW_SIZE`, `MEMORY_SYSTEM_CONTEXT`) and CLI flags.

pub mod cli;
pub mod logger;

pub use cli::{load_memory, run, Cli, Commands};
pub use logger::init_tracing;
