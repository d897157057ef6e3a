//! Document scanner.
//!
//! Splits free text into literal runs and `{{...}}` occurrences. An occurrence
//! is either a function placeholder matching the grammar, a test-data
//! reference, or malformed text up to the next `}}`.

use super::ast::{DocumentSegment, PlaceholderKind};
use super::error::ParseError;
use super::placeholder::match_at;

/// Marker segment of a test-data reference.
const TEST_DATA_MARKER: &str = "TestData";

/// Scan a document into segments.
///
/// Adjacent literal text is merged. An opening `{{` that neither matches the
/// grammar nor has a closing `}}` after it is kept as literal text.
pub fn scan_document(text: &str) -> Vec<DocumentSegment> {
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut cursor = 0;

    while let Some(found) = text[cursor..].find("{{") {
        let start = cursor + found;
        let Some((kind, end)) = classify_at(text, start) else {
            cursor = start + 1;
            continue;
        };
        if start > literal_start {
            segments.push(DocumentSegment::Literal(text[literal_start..start].to_string()));
        }
        segments.push(DocumentSegment::Placeholder {
            span: start..end,
            kind,
        });
        cursor = end;
        literal_start = end;
    }

    if literal_start < text.len() {
        segments.push(DocumentSegment::Literal(text[literal_start..].to_string()));
    }
    segments
}

/// Classify the occurrence opening at `start`, returning it and its end offset.
fn classify_at(text: &str, start: usize) -> Option<(PlaceholderKind, usize)> {
    if let Some((raw, len)) = match_at(text, start) {
        let end = start + len;
        let raw_text = &text[start..end];
        let kind = match raw.into_invocation(raw_text) {
            Ok(invocation) => PlaceholderKind::Function(invocation),
            Err(error) => PlaceholderKind::Malformed {
                raw_text: raw_text.to_string(),
                error,
            },
        };
        return Some((kind, end));
    }

    let close = text[start + 2..].find("}}")? + start + 2;
    let end = close + 2;
    let raw_text = text[start..end].to_string();
    let body = &text[start + 2..close];

    let kind = if is_test_data_reference(body) {
        PlaceholderKind::TestData {
            column: test_data_column(body),
            raw_text,
        }
    } else {
        PlaceholderKind::Malformed {
            error: ParseError::NoMatch {
                text: raw_text.clone(),
            },
            raw_text,
        }
    };
    Some((kind, end))
}

fn is_test_data_reference(body: &str) -> bool {
    body.split('.').any(|segment| segment.trim() == TEST_DATA_MARKER)
}

/// The column of a test-data reference: the last dotted segment after the
/// `TestData` marker, in either `Group.TestData.Column` or
/// `TestData.Group.Column` order.
fn test_data_column(body: &str) -> Option<String> {
    let segments: Vec<&str> = body.split('.').map(str::trim).collect();
    let marker = segments.iter().position(|s| *s == TEST_DATA_MARKER)?;
    let column = segments[marker + 1..].last()?;
    if column.is_empty() {
        return None;
    }
    Some((*column).to_string())
}
