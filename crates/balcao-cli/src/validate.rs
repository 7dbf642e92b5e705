//! # Validate Subcommand
//!
//! Whole-record validation of JSON registration files. Parses the file as
//! the requested record kind, runs its `validate()`, and prints every field
//! failure. Company records also print the state registration that would be
//! recorded, since the taxation rule may rewrite the submitted value even
//! when nothing fails.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use balcao_checkout::{Address, CompanyRegistration, PersonRegistration, ValidationReport};

/// Registration record kinds the CLI can validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordKind {
    /// Natural-person registration.
    Person,
    /// Company registration.
    Company,
    /// Delivery address.
    Address,
}

/// Arguments for the `balcao validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Record kind contained in the file.
    #[arg(value_enum)]
    pub kind: RecordKind,

    /// Path to a JSON file holding one record.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when the record validates, 1 when any field fails.
/// Operational errors (unreadable file, malformed JSON) propagate as `Err`.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let content = std::fs::read_to_string(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;

    let report = match args.kind {
        RecordKind::Person => {
            let record: PersonRegistration = parse_record(&content, &args.path)?;
            record.validate()
        }
        RecordKind::Company => {
            let record: CompanyRegistration = parse_record(&content, &args.path)?;
            let validation = record.validate();
            println!("ie records as: {:?}", validation.ie);
            validation.report
        }
        RecordKind::Address => {
            let record: Address = parse_record(&content, &args.path)?;
            record.validate()
        }
    };

    print_report(&args.path.display().to_string(), &report);
    if report.is_valid() {
        Ok(0)
    } else {
        Ok(1)
    }
}

fn parse_record<T: serde::de::DeserializeOwned>(content: &str, path: &Path) -> Result<T> {
    serde_json::from_str(content).with_context(|| {
        format!(
            "failed to parse {} as a record of the requested kind",
            path.display()
        )
    })
}

fn print_report(source: &str, report: &ValidationReport) {
    if report.is_valid() {
        println!("OK: {source}");
        return;
    }
    println!("FAIL: {source} — {} field error(s)", report.errors().len());
    for error in report.errors() {
        println!("  {error}");
    }
}
