//! # balcao CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Exit codes: 0 success, 1 validation failure, 2 operational error.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use balcao_cli::check::{run_check, CheckArgs};
use balcao_cli::format::{run_format, FormatArgs};
use balcao_cli::validate::{run_validate, ValidateArgs};

/// Balcão — Brazilian commerce document toolbox
///
/// Checks and formats the documents a Brazilian checkout collects: CPF and
/// CNPJ taxpayer numbers and phone numbers, plus whole-record validation of
/// JSON registration files.
#[derive(Parser, Debug)]
#[command(name = "balcao", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a document: a single value or every line of a file.
    Check(CheckArgs),

    /// Print a document in its conventional punctuated form.
    Format(FormatArgs),

    /// Validate a JSON registration record and print the field report.
    Validate(ValidateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Check(args) => run_check(&args),
        Commands::Format(args) => run_format(&args),
        Commands::Validate(args) => run_validate(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
