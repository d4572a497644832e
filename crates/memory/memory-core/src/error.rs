use prompt::MessageRole;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MemoryError {
    #[error("No messages in memory")]
    Empty,

    #[error("Cannot truncate {kind} of length {length} to {max_length}: value is not sliceable")]
    Untruncatable {
        kind: &'static str,
        length: usize,
        max_length: usize,
    },

    #[error("Invalid window limit: {0} (expected an integer)")]
    InvalidLimit(String),

    #[error("Unexpected role in conversation snapshot: {0}")]
    UnexpectedRole(MessageRole),
}

pub type Result<T> = std::result::Result<T, MemoryError>;
