//! Error types for registration and dispatch.

use thiserror::Error;

use crate::dispatch::FallbackError;
use crate::generators::GenerateError;
use crate::parser::ParseError;

/// An error returned by [`FunctionRegistry::register`](crate::FunctionRegistry::register).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("function name must not be empty")]
    EmptyName,
}

/// An error from resolving one placeholder.
///
/// Component errors pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Fallback(#[from] FallbackError),
}
