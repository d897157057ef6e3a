//! Collaborator for placeholders with no native handler.

use thiserror::Error;

use crate::parser::PlaceholderInvocation;

/// An error reported by a [`ScriptFallback`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FallbackError {
    /// The fallback does not know the function either.
    #[error("unsupported function '{function_name}' in '{placeholder}'")]
    Unsupported {
        placeholder: String,
        function_name: String,
    },

    /// The fallback knows the function but running it failed.
    #[error("'{placeholder}' failed in fallback: {message}")]
    Failed { placeholder: String, message: String },
}

impl FallbackError {
    /// Build a [`FallbackError::Unsupported`] for an invocation.
    pub fn unsupported(invocation: &PlaceholderInvocation) -> Self {
        FallbackError::Unsupported {
            placeholder: invocation.raw_text.clone(),
            function_name: invocation.function_name.clone(),
        }
    }
}

/// Executes placeholders that the native registry does not handle.
///
/// Implementations receive the same structured invocation a native generator
/// would. They may block.
pub trait ScriptFallback: Send + Sync {
    fn execute(
        &self,
        invocation: &PlaceholderInvocation,
        execution_identity: &str,
    ) -> Result<String, FallbackError>;
}

/// A fallback that supports nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoFallback;

impl ScriptFallback for NoFallback {
    fn execute(
        &self,
        invocation: &PlaceholderInvocation,
        _execution_identity: &str,
    ) -> Result<String, FallbackError> {
        Err(FallbackError::unsupported(invocation))
    }
}

impl<F> ScriptFallback for F
where
    F: Fn(&PlaceholderInvocation, &str) -> Result<String, FallbackError> + Send + Sync,
{
    fn execute(
        &self,
        invocation: &PlaceholderInvocation,
        execution_identity: &str,
    ) -> Result<String, FallbackError> {
        self(invocation, execution_identity)
    }
}
