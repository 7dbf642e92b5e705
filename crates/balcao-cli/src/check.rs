//! # Check Subcommand
//!
//! Document validation from the command line: a single value passed as an
//! argument, or every line of a newline-delimited file. Batch mode prints a
//! summary plus one line per failure, keyed by the 1-based line number in
//! the input file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use balcao_core::ValidationError;

use crate::DocKind;

/// Arguments for the `balcao check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Document kind to validate.
    #[arg(value_enum)]
    pub kind: DocKind,

    /// The value to validate.
    #[arg(value_name = "VALUE")]
    pub value: Option<String>,

    /// Validate every line of a file instead of a single value.
    #[arg(long, value_name = "PATH", conflicts_with = "value")]
    pub file: Option<PathBuf>,
}

/// Execute the check subcommand.
///
/// Returns exit code: 0 when every document validates, 1 when any fails.
/// Operational errors (unreadable file) propagate as `Err`.
pub fn run_check(args: &CheckArgs) -> Result<u8> {
    if let Some(ref path) = args.file {
        return check_file(args.kind, path);
    }

    match args.value {
        Some(ref value) => Ok(check_single(args.kind, value)),
        None => {
            println!("Usage: balcao check <cpf|cnpj|phone> [VALUE] [--file PATH]");
            Ok(1)
        }
    }
}

/// Check one value and print the verdict.
fn check_single(kind: DocKind, value: &str) -> u8 {
    match kind.validate(value) {
        Ok(()) => {
            println!("OK: {value}");
            0
        }
        Err(e) => {
            println!("FAIL: {e}");
            1
        }
    }
}

/// Check every non-blank line of a file and print a summary.
///
/// Blank lines are skipped, not counted; reported line numbers still refer
/// to the file as written.
fn check_file(kind: DocKind, path: &Path) -> Result<u8> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let mut total = 0usize;
    let mut passed = 0usize;
    let mut failures: Vec<(usize, ValidationError)> = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        total += 1;
        match kind.validate(line) {
            Ok(()) => passed += 1,
            Err(e) => failures.push((index + 1, e)),
        }
    }

    tracing::debug!(path = %path.display(), total, "checked documents from file");

    println!("Documents: {passed}/{total} passed");
    for (line_number, error) in &failures {
        println!("  FAIL: line {line_number} — {error}");
    }

    if failures.is_empty() {
        Ok(0)
    } else {
        Ok(1)
    }
}
