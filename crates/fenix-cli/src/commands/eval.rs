//! Implementation of the `fenix eval` command.

use std::ops::Range;

use fenix::{derive_seed, parse_placeholder, DispatchError, ParseError, Resolution};
use miette::IntoDiagnostic;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::commands::Session;
use crate::output::diagnostic::suggestion_help;
use crate::output::PlaceholderDiagnostic;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Placeholder to resolve, e.g. '{{Fenix.TodayShiftDay(-1)}}'
    pub placeholder: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult {
    pub placeholder: String,
    pub function: String,
    pub seed: u64,
    pub result: String,
}

/// Run the eval command.
pub fn run_eval(session: &Session, args: EvalArgs) -> miette::Result<i32> {
    let invocation = match parse_placeholder(&args.placeholder) {
        Ok(invocation) => invocation,
        Err(e) => {
            report(&args, &DispatchError::Parse(e));
            return Ok(exitcode::DATAERR);
        }
    };

    let resolution = session
        .dispatcher
        .dispatch_invocation(&invocation, &session.execution_identity);
    match resolution {
        Ok(Resolution::Resolved(result)) => {
            if args.json {
                let output = EvalResult {
                    placeholder: invocation.raw_text.clone(),
                    function: invocation.function_name.clone(),
                    seed: derive_seed(
                        &session.execution_identity,
                        invocation.use_execution_entropy,
                        invocation.extra_entropy,
                    ),
                    result,
                };
                println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                println!("{}", result);
            }
            Ok(exitcode::OK)
        }
        Ok(Resolution::NotHandled(invocation)) => {
            let suggestions = session
                .dispatcher
                .registry()
                .suggestions(&invocation.function_name);
            if args.json {
                let output = serde_json::json!({
                    "error": "not handled",
                    "function": invocation.function_name,
                    "suggestions": suggestions,
                });
                eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                eprintln!(
                    "{} no native function '{}'",
                    "warning:".yellow().bold(),
                    invocation.function_name
                );
                if let Some(help) = suggestion_help(&suggestions) {
                    eprintln!("  {}", help);
                }
            }
            Ok(exitcode::DATAERR)
        }
        Err(e) => {
            report(&args, &e);
            Ok(exitcode::DATAERR)
        }
    }
}

fn report(args: &EvalArgs, error: &DispatchError) {
    if args.json {
        let output = serde_json::json!({ "error": error.to_string() });
        eprintln!("{}", output);
        return;
    }
    let span = error_span(&args.placeholder, error);
    PlaceholderDiagnostic::new("placeholder", &args.placeholder, span, error.to_string()).emit();
}

/// The part of the input an error refers to.
fn error_span(text: &str, error: &DispatchError) -> Range<usize> {
    let raw = match error {
        DispatchError::Generate(e) => e.placeholder(),
        DispatchError::Parse(ParseError::MalformedPlaceholder { placeholder, .. }) => placeholder,
        DispatchError::Parse(ParseError::NoMatch { .. }) | DispatchError::Fallback(_) => text,
    };
    text.find(raw)
        .map_or(0..text.len(), |start| start..start + raw.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_span_points_at_placeholder() {
        let text = "x {{F[-]()}} y";
        let error = DispatchError::Parse(parse_placeholder(text).unwrap_err());
        assert_eq!(error_span(text, &error), 2..12);
    }

    #[test]
    fn test_error_span_covers_unmatched_text() {
        let error = DispatchError::Parse(parse_placeholder("plain").unwrap_err());
        assert_eq!(error_span("plain", &error), 0..5);
    }
}
