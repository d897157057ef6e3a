//! Implementation of the `fenix render` command.

use std::collections::BTreeMap;
use std::fs::read_to_string;
use std::path::PathBuf;

use fenix::{DocumentResolver, ResolvedPlaceholder};
use miette::{miette, IntoDiagnostic};
use serde::Serialize;

use crate::commands::Session;
use crate::output::PlaceholderDiagnostic;

/// Arguments for the render command.
#[derive(Debug, clap::Args)]
pub struct RenderArgs {
    /// Document to render
    pub file: PathBuf,

    /// Test data in column=value format (repeatable)
    #[arg(short = 'd', long = "data", value_parser = parse_key_val)]
    pub data: Vec<(String, String)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for a rendered document.
#[derive(Serialize)]
struct RenderResult<'a> {
    text: String,
    failures: Vec<FailureJson<'a>>,
}

#[derive(Serialize)]
struct FailureJson<'a> {
    start: usize,
    end: usize,
    placeholder: &'a str,
    error: String,
}

/// Parse a column=value test data string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (column, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid test data '{}': expected column=value", s))?;
    Ok((column.trim().to_string(), value.to_string()))
}

/// Run the render command.
pub fn run_render(session: &Session, args: RenderArgs) -> miette::Result<i32> {
    let content = read_to_string(&args.file)
        .into_diagnostic()
        .map_err(|e| miette!("Failed to read {}: {}", args.file.display(), e))?;
    let data: BTreeMap<String, String> = args.data.into_iter().collect();

    let resolver = DocumentResolver::builder()
        .dispatcher(&session.dispatcher)
        .execution_identity(&session.execution_identity)
        .test_data(&data)
        .build();
    let document = resolver.resolve(&content);
    let failures = document.failures();

    if args.json {
        let output = RenderResult {
            text: document.text(),
            failures: failures.iter().copied().map(failure_json).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        print!("{}", document.text());
        let name = args.file.display().to_string();
        for failure in &failures {
            if let Err(error) = &failure.result {
                PlaceholderDiagnostic::new(&name, &content, failure.span.clone(), error.to_string())
                    .emit();
            }
        }
    }

    if failures.is_empty() {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}

fn failure_json(failure: &ResolvedPlaceholder) -> FailureJson<'_> {
    FailureJson {
        start: failure.span.start,
        end: failure.span.end,
        placeholder: &failure.raw_text,
        error: failure
            .result
            .as_ref()
            .err()
            .map(ToString::to_string)
            .unwrap_or_default(),
    }
}
