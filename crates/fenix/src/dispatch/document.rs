//! Whole-document resolution.

use std::collections::{BTreeMap, HashMap};
use std::ops::Range;

use bon::Builder;
use thiserror::Error;
use tracing::debug;

use crate::dispatch::{DispatchError, Dispatcher, NoFallback, ScriptFallback};
use crate::parser::{DocumentSegment, PlaceholderKind, scan_document};

/// Values for test-data references, by column name.
pub trait TestDataSource: Send + Sync {
    fn value(&self, column: &str) -> Option<String>;
}

impl TestDataSource for HashMap<String, String> {
    fn value(&self, column: &str) -> Option<String> {
        self.get(column).cloned()
    }
}

impl TestDataSource for BTreeMap<String, String> {
    fn value(&self, column: &str) -> Option<String> {
        self.get(column).cloned()
    }
}

/// Why one placeholder in a document produced no value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A test-data reference that names no column.
    #[error("'{raw_text}' is not a valid test data reference")]
    InvalidTestDataReference { raw_text: String },

    /// The referenced column has no value.
    #[error("test data column '{column}' does not exist")]
    MissingTestData { raw_text: String, column: String },

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// A resolved occurrence of `{{...}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPlaceholder {
    /// Byte range in the source document.
    pub span: Range<usize>,
    pub raw_text: String,
    pub result: Result<String, ResolveError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedSegment {
    Literal(String),
    Placeholder(ResolvedPlaceholder),
}

/// A document with every placeholder resolved or failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDocument {
    pub segments: Vec<ResolvedSegment>,
}

impl ResolvedDocument {
    /// The document as plain text. Failed placeholders are replaced by their
    /// error message.
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                ResolvedSegment::Literal(text) => text.clone(),
                ResolvedSegment::Placeholder(placeholder) => match &placeholder.result {
                    Ok(value) => value.clone(),
                    Err(error) => error.to_string(),
                },
            })
            .collect()
    }

    /// Placeholders that produced no value, in document order.
    pub fn failures(&self) -> Vec<&ResolvedPlaceholder> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                ResolvedSegment::Placeholder(placeholder) if placeholder.result.is_err() => {
                    Some(placeholder)
                }
                ResolvedSegment::Literal(_) | ResolvedSegment::Placeholder(_) => None,
            })
            .collect()
    }
}

/// Resolves every placeholder in a document.
///
/// Function placeholders go through the dispatcher, then the fallback for
/// names with no native handler. Test-data references are looked up in the
/// test data.
#[derive(Builder)]
pub struct DocumentResolver<'a> {
    dispatcher: &'a Dispatcher,
    execution_identity: &'a str,
    #[builder(default = &NoFallback as &dyn ScriptFallback)]
    fallback: &'a dyn ScriptFallback,
    test_data: Option<&'a dyn TestDataSource>,
}

impl DocumentResolver<'_> {
    pub fn resolve(&self, text: &str) -> ResolvedDocument {
        let segments = scan_document(text)
            .into_iter()
            .map(|segment| match segment {
                DocumentSegment::Literal(text) => ResolvedSegment::Literal(text),
                DocumentSegment::Placeholder { span, kind } => {
                    ResolvedSegment::Placeholder(ResolvedPlaceholder {
                        span,
                        raw_text: kind.raw_text().to_string(),
                        result: self.resolve_kind(kind),
                    })
                }
            })
            .collect();
        ResolvedDocument { segments }
    }

    fn resolve_kind(&self, kind: PlaceholderKind) -> Result<String, ResolveError> {
        match kind {
            PlaceholderKind::Function(invocation) => Ok(self.dispatcher.resolve_invocation(
                &invocation,
                self.execution_identity,
                self.fallback,
            )?),
            PlaceholderKind::TestData { raw_text, column } => {
                let Some(column) = column else {
                    return Err(ResolveError::InvalidTestDataReference { raw_text });
                };
                debug!(%column, "looking up test data");
                self.test_data
                    .and_then(|data| data.value(&column))
                    .ok_or(ResolveError::MissingTestData { raw_text, column })
            }
            PlaceholderKind::Malformed { error, .. } => {
                Err(ResolveError::Dispatch(DispatchError::Parse(error)))
            }
        }
    }
}
