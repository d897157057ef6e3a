//! Miette diagnostic for placeholder errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::ops::Range;

use miette::{Diagnostic, NamedSource, Report, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic pointing at one placeholder in a document.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(fenix::placeholder))]
pub struct PlaceholderDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("in this placeholder")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl PlaceholderDiagnostic {
    /// Create a diagnostic for the placeholder at `span` of `content`.
    pub fn new(name: &str, content: &str, span: Range<usize>, message: String) -> Self {
        // Clamp to the content so miette never renders out of bounds.
        let start = span.start.min(content.len());
        let end = span.end.clamp(start, content.len());
        PlaceholderDiagnostic {
            src: NamedSource::new(name, content.to_string()),
            span: (start, end - start).into(),
            message,
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Render through the installed miette handler to stderr.
    pub fn emit(self) {
        eprintln!("{:?}", Report::new(self));
    }
}

/// Help text suggesting registered names close to an unknown one.
pub fn suggestion_help(suggestions: &[String]) -> Option<String> {
    if suggestions.is_empty() {
        return None;
    }
    let names: Vec<String> = suggestions
        .iter()
        .map(|name| format!("'{}'", name.replace('_', ".")))
        .collect();
    Some(format!("did you mean {}?", names.join(" or ")))
}
