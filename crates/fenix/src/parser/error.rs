//! Parse error types for placeholders.

use thiserror::Error;

/// An error that occurred while parsing a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text does not fit the placeholder grammar at all.
    #[error("no match found for '{text}'")]
    NoMatch { text: String },

    /// The grammar matched but a component failed conversion.
    #[error("malformed placeholder '{placeholder}': {reason} '{token}'")]
    MalformedPlaceholder {
        placeholder: String,
        token: String,
        reason: MalformedReason,
    },
}

/// Which component of a matched placeholder failed conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("array index is not an integer")]
    ArrayIndex,
    #[error("extra entropy is not an unsigned 64-bit integer")]
    ExtraEntropy,
}
