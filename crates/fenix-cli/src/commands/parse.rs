//! Implementation of the `fenix parse` command.

use fenix::{parse_placeholder, PlaceholderInvocation};
use miette::IntoDiagnostic;
use owo_colors::OwoColorize;

use crate::output::PlaceholderDiagnostic;

/// Arguments for the parse command.
#[derive(Debug, clap::Args)]
pub struct ParseArgs {
    /// Placeholder text to parse
    pub placeholder: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the parse command.
pub fn run_parse(args: ParseArgs) -> miette::Result<i32> {
    let invocation = match parse_placeholder(&args.placeholder) {
        Ok(invocation) => invocation,
        Err(e) => {
            if args.json {
                eprintln!("{}", serde_json::json!({ "error": e.to_string() }));
            } else {
                let text = &args.placeholder;
                PlaceholderDiagnostic::new("placeholder", text, 0..text.len(), e.to_string())
                    .with_help("placeholders look like {{Name.Path[indexes](arguments)}(true,0)}")
                    .emit();
            }
            return Ok(exitcode::DATAERR);
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&invocation).into_diagnostic()?);
    } else {
        print_invocation(&invocation);
    }
    Ok(exitcode::OK)
}

fn print_invocation(invocation: &PlaceholderInvocation) {
    println!("{:<11}{}", "matched".bold(), invocation.raw_text);
    println!("{:<11}{}", "function".bold(), invocation.function_name);
    println!("{:<11}{:?}", "indexes".bold(), invocation.array_indexes);
    println!("{:<11}{:?}", "arguments".bold(), invocation.arguments);
    let entropy = if invocation.use_execution_entropy {
        format!("execution identity + {}", invocation.extra_entropy)
    } else {
        format!("fixed {}", invocation.extra_entropy)
    };
    println!("{:<11}{}", "entropy".bold(), entropy);
}
