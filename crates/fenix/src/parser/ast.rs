//! Public types produced by the placeholder parser.
//!
//! These types are public so that external tooling (linters, renderers, the
//! scripting fallback) can consume parsed placeholders without re-parsing.

use std::fmt;
use std::ops::Range;

use serde::Serialize;

use super::error::ParseError;

/// Separator that replaces `.` in a dotted function path.
pub const NAME_SEPARATOR: char = '_';

/// One parsed placeholder occurrence.
///
/// An invocation is fully determined by its raw text: parsing the same text
/// twice always yields equal values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderInvocation {
    /// The exact substring matched by the grammar.
    pub raw_text: String,
    /// Registry key, e.g. `Fenix_RandomPositiveDecimalValue_Sum`.
    pub function_name: String,
    /// Array indexes in source order. May be empty or negative.
    pub array_indexes: Vec<i64>,
    /// Trimmed positional arguments, kept as text.
    pub arguments: Vec<String>,
    /// Whether the execution identity contributes to the seed.
    pub use_execution_entropy: bool,
    /// Offset added to the seed.
    pub extra_entropy: u64,
}

impl PlaceholderInvocation {
    /// Build the canonical registry key from a dotted function path.
    pub fn canonical_name(dotted: &str) -> String {
        dotted.replace('.', &NAME_SEPARATOR.to_string())
    }

    /// The single array index of a function that accepts at most one, or
    /// `default` when none was given. Returns `None` for two or more indexes.
    pub fn single_index_or(&self, default: i64) -> Option<i64> {
        match self.array_indexes.as_slice() {
            [] => Some(default),
            [index] => Some(*index),
            _ => None,
        }
    }
}

impl fmt::Display for PlaceholderInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw_text)
    }
}

/// A piece of a scanned document.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentSegment {
    /// Text outside any placeholder, copied verbatim.
    Literal(String),
    /// A `{{...}}` occurrence.
    Placeholder {
        /// Byte range of the occurrence in the scanned document.
        span: Range<usize>,
        /// What the occurrence refers to.
        kind: PlaceholderKind,
    },
}

/// Classification of a `{{...}}` occurrence.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaceholderKind {
    /// A function call placeholder that matched the grammar.
    Function(PlaceholderInvocation),
    /// A reference into the test-data table: `{{Group.TestData.Column}}` or
    /// `{{TestData.Group.Column}}`.
    TestData {
        raw_text: String,
        /// Column name, or `None` when the reference names no column.
        column: Option<String>,
    },
    /// Text between `{{` and `}}` that fails the grammar.
    Malformed {
        raw_text: String,
        error: ParseError,
    },
}

impl PlaceholderKind {
    /// The source text of this occurrence.
    pub fn raw_text(&self) -> &str {
        match self {
            PlaceholderKind::Function(invocation) => &invocation.raw_text,
            PlaceholderKind::TestData { raw_text, .. } | PlaceholderKind::Malformed { raw_text, .. } => {
                raw_text
            }
        }
    }
}
