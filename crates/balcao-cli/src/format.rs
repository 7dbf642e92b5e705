//! # Format Subcommand
//!
//! Prints a document in its conventional punctuated form. Only valid
//! documents have a canonical rendering, so formatting an invalid value is
//! a failure, not a best-effort guess.

use anyhow::Result;
use clap::Args;

use crate::DocKind;

/// Arguments for the `balcao format` subcommand.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Document kind to format.
    #[arg(value_enum)]
    pub kind: DocKind,

    /// The value to format; punctuation in the input is ignored.
    #[arg(value_name = "VALUE")]
    pub value: String,
}

/// Execute the format subcommand.
///
/// Returns exit code: 0 with the rendered document on stdout, 1 when the
/// value does not validate.
pub fn run_format(args: &FormatArgs) -> Result<u8> {
    match args.kind.formatted(&args.value) {
        Ok(rendered) => {
            println!("{rendered}");
            Ok(0)
        }
        Err(e) => {
            println!("FAIL: {e}");
            Ok(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_for(kind: DocKind, value: &str) -> FormatArgs {
        FormatArgs {
            kind,
            value: value.to_string(),
        }
    }

    #[test]
    fn valid_documents_format_and_exit_zero() {
        assert_eq!(run_format(&args_for(DocKind::Cpf, "11144477735")).unwrap(), 0);
        assert_eq!(
            run_format(&args_for(DocKind::Cnpj, "89139268000112")).unwrap(),
            0
        );
        assert_eq!(
            run_format(&args_for(DocKind::Phone, "4352103521")).unwrap(),
            0
        );
    }

    #[test]
    fn already_punctuated_input_formats_too() {
        assert_eq!(
            run_format(&args_for(DocKind::Cpf, "111.444.777-35")).unwrap(),
            0
        );
    }

    #[test]
    fn invalid_value_exits_one() {
        assert_eq!(run_format(&args_for(DocKind::Cpf, "123")).unwrap(), 1);
        assert_eq!(
            run_format(&args_for(DocKind::Cnpj, "11111111111111")).unwrap(),
            1
        );
    }
}
