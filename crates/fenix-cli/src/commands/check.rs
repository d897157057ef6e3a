//! Implementation of the `fenix check` command.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use fenix::{scan_document, DocumentSegment, PlaceholderKind};
use miette::{miette, IntoDiagnostic};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::commands::Session;
use crate::output::diagnostic::suggestion_help;
use crate::output::PlaceholderDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Documents to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Also fail on functions with no native handler
    #[arg(long)]
    pub strict: bool,
}

/// One problem found in a document.
#[derive(Debug, Serialize)]
struct Finding {
    file: String,
    start: usize,
    end: usize,
    placeholder: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
    /// Whether the finding fails the check.
    error: bool,
}

/// Run the check command.
pub fn run_check(session: &Session, args: CheckArgs) -> miette::Result<i32> {
    let mut findings = Vec::new();
    let mut placeholder_count = 0;

    for path in &args.files {
        let content = read_to_string(path)
            .into_diagnostic()
            .map_err(|e| miette!("Failed to read {}: {}", path.display(), e))?;
        let (count, file_findings) = check_document(session, path, &content, args.strict);
        placeholder_count += count;

        if !args.json {
            for finding in &file_findings {
                let mut diagnostic = PlaceholderDiagnostic::new(
                    &finding.file,
                    &content,
                    finding.start..finding.end,
                    finding.message.clone(),
                );
                if let Some(help) = &finding.help {
                    diagnostic = diagnostic.with_help(help.clone());
                }
                diagnostic.emit();
            }
        }
        findings.extend(file_findings);
    }

    let errors = findings.iter().filter(|f| f.error).count();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&findings).into_diagnostic()?);
    } else if errors == 0 {
        println!(
            "{} {} placeholders in {} files",
            "ok:".green().bold(),
            placeholder_count,
            args.files.len()
        );
    } else {
        eprintln!("{} {} problems found", "error:".red().bold(), errors);
    }

    if errors > 0 {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

/// Count the placeholders in one document and collect its findings.
fn check_document(
    session: &Session,
    path: &Path,
    content: &str,
    strict: bool,
) -> (usize, Vec<Finding>) {
    let registry = session.dispatcher.registry();
    let mut findings = Vec::new();
    let mut count = 0;

    for segment in scan_document(content) {
        let DocumentSegment::Placeholder { span, kind } = segment else {
            continue;
        };
        count += 1;
        let finding = |message: String, help: Option<String>, error: bool| Finding {
            file: path.display().to_string(),
            start: span.start,
            end: span.end,
            placeholder: kind.raw_text().to_string(),
            message,
            help,
            error,
        };
        match &kind {
            PlaceholderKind::Malformed { error, .. } => {
                findings.push(finding(error.to_string(), None, true));
            }
            PlaceholderKind::Function(invocation)
                if !registry.contains(&invocation.function_name) =>
            {
                let help = suggestion_help(&registry.suggestions(&invocation.function_name));
                let message = format!("no native function '{}'", invocation.function_name);
                findings.push(finding(message, help, strict));
            }
            PlaceholderKind::Function(_) | PlaceholderKind::TestData { .. } => {}
        }
    }
    (count, findings)
}
