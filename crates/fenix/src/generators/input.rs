//! Input handed to every generator.

use crate::clock::Clock;
use crate::generators::GenerateError;
use crate::parser::PlaceholderInvocation;

/// Everything a generator may read: the parsed invocation, the execution
/// identity, the derived seed and the clock.
///
/// Generators are pure over this input. The same input always produces the
/// same output.
#[derive(Clone, Copy)]
pub struct GeneratorInput<'a> {
    pub invocation: &'a PlaceholderInvocation,
    pub execution_identity: &'a str,
    pub seed: u64,
    pub clock: &'a dyn Clock,
}

impl<'a> GeneratorInput<'a> {
    /// The raw placeholder text, for error messages.
    pub fn placeholder(&self) -> &'a str {
        &self.invocation.raw_text
    }

    pub fn indexes(&self) -> &'a [i64] {
        &self.invocation.array_indexes
    }

    pub fn arguments(&self) -> &'a [String] {
        &self.invocation.arguments
    }

    /// The array index of a function that accepts at most one, defaulting to 1.
    pub fn single_index(&self) -> Result<i64, GenerateError> {
        self.invocation
            .single_index_or(1)
            .ok_or_else(|| GenerateError::TooManyIndexes {
                placeholder: self.placeholder().to_string(),
                max: 1,
                indexes: self.indexes().to_vec(),
            })
    }

    /// Parse an argument that must be an integer.
    pub fn integer_argument(&self, argument: &str) -> Result<i64, GenerateError> {
        argument
            .trim()
            .parse::<i64>()
            .map_err(|_| GenerateError::InvalidArgumentType {
                placeholder: self.placeholder().to_string(),
                argument: argument.to_string(),
            })
    }

    pub(crate) fn argument_count_error(&self, expected: &'static str) -> GenerateError {
        GenerateError::InvalidArgumentCount {
            placeholder: self.placeholder().to_string(),
            expected,
            arguments: self.arguments().to_vec(),
        }
    }

    pub(crate) fn out_of_range(&self, argument: &str, reason: &'static str) -> GenerateError {
        GenerateError::ArgumentOutOfRange {
            placeholder: self.placeholder().to_string(),
            argument: argument.to_string(),
            reason,
        }
    }
}
