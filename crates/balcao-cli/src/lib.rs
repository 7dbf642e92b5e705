//! # balcao-cli — CLI Toolbox for Brazilian Commerce Documents
//!
//! Provides the `balcao` command-line interface over the `balcao-core`
//! validators and the `balcao-checkout` registration records.
//!
//! ## Subcommands
//!
//! - `balcao check` — Validate a CPF, CNPJ, or phone number; single value or
//!   every line of a file.
//! - `balcao format` — Print a document in its conventional punctuated form.
//! - `balcao validate` — Run a JSON registration record (person, company, or
//!   address) through whole-record validation and print the field report.
//!
//! ```bash
//! balcao check cpf 111.444.777-35
//! balcao check cnpj --file cnpjs.txt
//! balcao format phone 11987654321
//! balcao validate company company.json
//! ```

pub mod check;
pub mod format;
pub mod validate;

use clap::ValueEnum;

use balcao_core::{
    validate_cnpj, validate_cpf, validate_phone, Cnpj, Cpf, Phone, ValidationError,
};

/// Document kinds the CLI can check and format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocKind {
    /// CPF, the natural-person taxpayer number.
    Cpf,
    /// CNPJ, the legal-entity taxpayer number.
    Cnpj,
    /// Phone number with area code.
    Phone,
}

impl DocKind {
    /// Validate a value as this document kind.
    ///
    /// # Errors
    ///
    /// Returns the core validator's error for the kind when the value does
    /// not validate.
    pub fn validate(&self, value: &str) -> Result<(), ValidationError> {
        match self {
            Self::Cpf => validate_cpf(value),
            Self::Cnpj => validate_cnpj(value),
            Self::Phone => validate_phone(value),
        }
    }

    /// Render a value in the conventional punctuated form for this kind.
    ///
    /// # Errors
    ///
    /// Returns the core validator's error when the value does not validate;
    /// only valid documents have a canonical rendering.
    pub fn formatted(&self, value: &str) -> Result<String, ValidationError> {
        match self {
            Self::Cpf => Ok(Cpf::new(value)?.formatted()),
            Self::Cnpj => Ok(Cnpj::new(value)?.formatted()),
            Self::Phone => Ok(Phone::new(value)?.formatted()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_dispatches_by_kind() {
        assert!(DocKind::Cpf.validate("111.444.777-35").is_ok());
        assert!(DocKind::Cpf.validate("111.444.777-34").is_err());
        assert!(DocKind::Cnpj.validate("89139268000112").is_ok());
        assert!(DocKind::Cnpj.validate("89139268000113").is_err());
        assert!(DocKind::Phone.validate("4352103521").is_ok());
        assert!(DocKind::Phone.validate("123").is_err());
    }

    #[test]
    fn formatted_restores_punctuation() {
        assert_eq!(
            DocKind::Cpf.formatted("11144477735").unwrap(),
            "111.444.777-35"
        );
        assert_eq!(
            DocKind::Cnpj.formatted("89139268000112").unwrap(),
            "89.139.268/0001-12"
        );
        assert_eq!(
            DocKind::Phone.formatted("11987654321").unwrap(),
            "(11) 98765-4321"
        );
    }

    #[test]
    fn formatted_rejects_invalid_values() {
        assert!(DocKind::Cpf.formatted("123").is_err());
        assert!(DocKind::Cnpj.formatted("").is_err());
        assert!(DocKind::Phone.formatted("12345").is_err());
    }
}
