//! Error types for value generators.

use thiserror::Error;

/// An error returned by a generator. Every variant names the placeholder it
/// was raised for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The function takes no array index but one was given.
    #[error("array index is not supported in '{placeholder}', got {indexes:?}")]
    UnsupportedIndex {
        placeholder: String,
        indexes: Vec<i64>,
    },

    /// More array indexes than the function accepts.
    #[error("at most {max} array index allowed in '{placeholder}', got {indexes:?}")]
    TooManyIndexes {
        placeholder: String,
        max: usize,
        indexes: Vec<i64>,
    },

    /// Wrong number of arguments.
    #[error("'{placeholder}' expects {expected} arguments, got {}: {arguments:?}", arguments.len())]
    InvalidArgumentCount {
        placeholder: String,
        expected: &'static str,
        arguments: Vec<String>,
    },

    /// An argument that must be an integer is not one.
    #[error("argument '{argument}' in '{placeholder}' is not an integer")]
    InvalidArgumentType {
        placeholder: String,
        argument: String,
    },

    /// An integer argument outside the range the function supports.
    #[error("argument '{argument}' in '{placeholder}' is out of range: {reason}")]
    ArgumentOutOfRange {
        placeholder: String,
        argument: String,
        reason: &'static str,
    },

    /// A failure reported by a caller-registered handler.
    #[error("'{placeholder}' failed: {message}")]
    Failed { placeholder: String, message: String },
}

impl GenerateError {
    /// The raw placeholder text the error was raised for.
    pub fn placeholder(&self) -> &str {
        match self {
            GenerateError::UnsupportedIndex { placeholder, .. }
            | GenerateError::TooManyIndexes { placeholder, .. }
            | GenerateError::InvalidArgumentCount { placeholder, .. }
            | GenerateError::InvalidArgumentType { placeholder, .. }
            | GenerateError::ArgumentOutOfRange { placeholder, .. }
            | GenerateError::Failed { placeholder, .. } => placeholder,
        }
    }
}
