//! Fenix CLI entry point.
//!
//! Provides command-line tools for Fenix placeholder documents:
//! - `fenix eval` - Resolve one placeholder
//! - `fenix parse` - Show how a placeholder is parsed
//! - `fenix check` - Report malformed placeholders in documents
//! - `fenix render` - Resolve every placeholder in a document
//! - `fenix functions` - List the native functions

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_eval, run_functions, run_parse, run_render, CheckArgs, EvalArgs, ParseArgs,
    RenderArgs, Session,
};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Fenix placeholder tools.
#[derive(Debug, Parser)]
#[command(name = "fenix")]
#[command(about = "Fenix placeholder tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Execution identity mixed into every seed
    #[arg(long, env = "FENIX_EXECUTION_ID", default_value = "", global = true)]
    pub execution_id: String,

    /// Freeze the clock at a local time (YYYY-MM-DDThh:mm:ss)
    #[arg(long, env = "FENIX_NOW", value_parser = parse_now, global = true)]
    pub now: Option<NaiveDateTime>,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve a single placeholder
    Eval(EvalArgs),
    /// Show the parsed form of a placeholder
    Parse(ParseArgs),
    /// Check documents for malformed placeholders
    Check(CheckArgs),
    /// Resolve every placeholder in a document
    Render(RenderArgs),
    /// List the native functions
    Functions,
}

fn parse_now(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map_err(|e| format!("invalid time '{s}': {e} (expected YYYY-MM-DDThh:mm:ss)"))
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG`.
fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(stderr)
        .with_target(false)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let session = Session::new(cli.execution_id, cli.now);
    let result = match cli.command {
        Commands::Eval(args) => run_eval(&session, args),
        Commands::Parse(args) => run_parse(args),
        Commands::Check(args) => run_check(&session, args),
        Commands::Render(args) => run_render(&session, args),
        Commands::Functions => run_functions(&session),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
