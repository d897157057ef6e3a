//! Placeholder grammar using winnow.
//!
//! Grammar, in order:
//!
//! ```text
//! {{ name ( [ index-list ] )? ( arguments )} ( ( true|false ( , digits )? ) )? }
//! ```
//!
//! - `name` is one or more dot-separated segments of `[A-Za-z0-9_]`
//! - `index-list` is comma-separated elements of optional whitespace, an
//!   optional sign and digits; empty elements are skipped
//! - `arguments` runs to the first `)}` that lets the rest of the grammar
//!   match, so arguments may themselves contain `)`
//! - the trailing entropy control defaults to `(true, 0)`

use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, delimited, opt, preceded, separated};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

use super::ast::PlaceholderInvocation;
use super::error::{MalformedReason, ParseError};

/// Parse the first placeholder found in `text`.
///
/// Like a regular-expression search, the placeholder may be preceded by other
/// text; `raw_text` of the result is exactly the matched substring.
pub fn parse_placeholder(text: &str) -> Result<PlaceholderInvocation, ParseError> {
    let mut search_from = 0;
    while let Some(found) = text[search_from..].find("{{") {
        let start = search_from + found;
        if let Some((raw, len)) = match_at(text, start) {
            return raw.into_invocation(&text[start..start + len]);
        }
        search_from = start + 1;
    }
    Err(ParseError::NoMatch {
        text: text.to_string(),
    })
}

/// Grammar components of a matched placeholder, before conversion.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RawPlaceholder<'i> {
    name: &'i str,
    indexes: Option<&'i str>,
    arguments: &'i str,
    entropy: Option<EntropyControl<'i>>,
}

#[derive(Debug, Clone, Copy)]
struct EntropyControl<'i> {
    use_execution_entropy: bool,
    extra: Option<&'i str>,
}

/// Try to match the grammar at byte offset `start` of `text`.
///
/// Returns the raw components and the matched length in bytes.
pub(crate) fn match_at(text: &str, start: usize) -> Option<(RawPlaceholder<'_>, usize)> {
    let mut remaining = &text[start..];
    let before = remaining.len();
    let raw = placeholder(&mut remaining).ok()?;
    Some((raw, before - remaining.len()))
}

impl RawPlaceholder<'_> {
    /// Convert the matched components into an invocation.
    pub(crate) fn into_invocation(self, raw_text: &str) -> Result<PlaceholderInvocation, ParseError> {
        let malformed = |token: &str, reason| ParseError::MalformedPlaceholder {
            placeholder: raw_text.to_string(),
            token: token.to_string(),
            reason,
        };

        let mut array_indexes = Vec::new();
        if let Some(list) = self.indexes {
            for element in list.split(',').map(str::trim) {
                if element.is_empty() {
                    continue;
                }
                let index = element
                    .parse::<i64>()
                    .map_err(|_| malformed(element, MalformedReason::ArrayIndex))?;
                array_indexes.push(index);
            }
        }

        let (use_execution_entropy, extra_entropy) = match self.entropy {
            None => (true, 0),
            Some(control) => {
                let extra = match control.extra {
                    None => 0,
                    Some(digits) => digits
                        .parse::<u64>()
                        .map_err(|_| malformed(digits, MalformedReason::ExtraEntropy))?,
                };
                (control.use_execution_entropy, extra)
            }
        };

        Ok(PlaceholderInvocation {
            raw_text: raw_text.to_string(),
            function_name: PlaceholderInvocation::canonical_name(self.name),
            array_indexes,
            arguments: normalize_arguments(self.arguments),
            use_execution_entropy,
            extra_entropy,
        })
    }
}

/// Split argument text on commas and trim each piece.
///
/// A single empty argument means "no arguments".
fn normalize_arguments(text: &str) -> Vec<String> {
    let arguments: Vec<String> = text.split(',').map(|a| a.trim().to_string()).collect();
    if arguments.len() == 1 && arguments[0].is_empty() {
        return Vec::new();
    }
    arguments
}

fn placeholder<'i>(input: &mut &'i str) -> ModalResult<RawPlaceholder<'i>> {
    let _ = "{{".parse_next(input)?;
    let name = function_path(input)?;
    let indexes = opt(delimited('[', index_list, ']')).parse_next(input)?;
    let (arguments, entropy) = arguments_and_tail(input)?;
    Ok(RawPlaceholder {
        name,
        indexes,
        arguments,
        entropy,
    })
}

/// Parse a dotted function path: `Fenix.RandomPositiveDecimalValue.Sum`.
fn function_path<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '.').parse_next(input)
}

/// Parse the raw index list between brackets.
fn index_list<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    separated::<_, _, (), _, _, _, _>(0.., index_element, ',')
        .take()
        .parse_next(input)
}

/// One list element: `ws sign? digits* ws`.
fn index_element(input: &mut &str) -> ModalResult<()> {
    (ws, opt(one_of(['+', '-'])), digit0, ws)
        .void()
        .parse_next(input)
}

/// Parse `(arguments)}`, the optional entropy control and the closing `}`.
///
/// Each `)}` on the opening line is tried in turn; the first one after
/// which the remaining grammar matches ends the arguments.
fn arguments_and_tail<'i>(
    input: &mut &'i str,
) -> ModalResult<(&'i str, Option<EntropyControl<'i>>)> {
    let _ = '('.parse_next(input)?;
    let body: &'i str = *input;
    let line = body.find('\n').map_or(body, |newline| &body[..newline]);
    let mut search_from = 0;
    while let Some(found) = line[search_from..].find(")}") {
        let end = search_from + found;
        let arguments = &body[..end];
        let mut tail = &body[end + 2..];
        if let Ok(entropy) = closing(&mut tail) {
            *input = tail;
            return Ok((arguments, entropy));
        }
        search_from = end + 1;
    }
    Err(ErrMode::Backtrack(ContextError::new()))
}

fn closing<'i>(input: &mut &'i str) -> ModalResult<Option<EntropyControl<'i>>> {
    let entropy = opt(entropy_control).parse_next(input)?;
    let _ = '}'.parse_next(input)?;
    Ok(entropy)
}

/// Parse `(true)`, `(false, 7)` and similar.
fn entropy_control<'i>(input: &mut &'i str) -> ModalResult<EntropyControl<'i>> {
    delimited(
        '(',
        (
            alt(("true".value(true), "false".value(false))),
            opt(preceded((',', ws), digit1)),
        ),
        ')',
    )
    .map(|(use_execution_entropy, extra)| EntropyControl {
        use_execution_entropy,
        extra,
    })
    .parse_next(input)
}

/// Parse optional whitespace.
fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}
