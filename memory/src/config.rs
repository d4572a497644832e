//! Memory config: default window and system context. Loaded from env.

use anyhow::{Context, Result};
use memory_core::parse_limit;
use serde_json::Value;
use std::env;
use tracing::debug;

use crate::conversation::DEFAULT_WINDOW_SIZE;

/// Construction parameters for [`ConversationMemory`](crate::ConversationMemory).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryConfig {
    /// MEMORY_WINDOW_SIZE
    window_size: i64,
    /// MEMORY_SYSTEM_CONTEXT
    system_context: Option<String>,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SIZE, None)
    }
}

impl MemoryConfig {
    pub fn new(window_size: i64, system_context: Option<String>) -> Self {
        Self {
            window_size,
            system_context,
        }
    }

    /// Load from environment variables.
    ///
    /// MEMORY_WINDOW_SIZE must be an integer when set; MEMORY_SYSTEM_CONTEXT is stored verbatim.
    pub fn load() -> Result<Self> {
        let window_size = match env::var("MEMORY_WINDOW_SIZE") {
            Ok(raw) => parse_window_size(&raw).context("MEMORY_WINDOW_SIZE")?,
            Err(_) => DEFAULT_WINDOW_SIZE,
        };
        let system_context = env::var("MEMORY_SYSTEM_CONTEXT").ok();

        debug!(
            window_size,
            has_system_context = system_context.is_some(),
            "MemoryConfig loaded"
        );
        Ok(Self::new(window_size, system_context))
    }

    pub fn window_size(&self) -> i64 {
        self.window_size
    }

    pub fn system_context(&self) -> Option<&str> {
        self.system_context.as_deref()
    }

    /// Overrides the window size (e.g. from a CLI flag).
    pub fn with_window_size(mut self, window_size: i64) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_system_context(mut self, system_context: impl Into<String>) -> Self {
        self.system_context = Some(system_context.into());
        self
    }
}

/// Parses a window size given as text. The text is read as JSON so "2.0" and "abc" are
/// rejected the same way as any other non-integer limit.
fn parse_window_size(raw: &str) -> memory_core::Result<i64> {
    let value: Value = serde_json::from_str(raw.trim())
        .unwrap_or_else(|_| Value::String(raw.to_string()));
    parse_limit(&value)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
