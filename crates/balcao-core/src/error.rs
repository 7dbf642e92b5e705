//! # Error Hierarchy
//!
//! Structured validation errors for the domain primitives, built with
//! `thiserror`. No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Every variant carries the rejected input and states the expected format,
//! so a checkout operator can diagnose a failed registration without
//! reproducing the submission. Validation failures are ordinary values — the
//! record layer collects them per field and keeps going (a malformed CPF must
//! not abort validation of the rest of the record).

use thiserror::Error;

/// Validation failures for the Brazilian domain primitives.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// CPF failed the length, repeated-sequence, or check-digit rules.
    #[error("invalid CPF: \"{0}\" (expected 11 digits with two valid check digits)")]
    InvalidCpf(String),

    /// CNPJ failed the length, repeated-sequence, or check-digit rules.
    #[error("invalid CNPJ: \"{0}\" (expected 14 digits with two valid check digits)")]
    InvalidCnpj(String),

    /// Phone number does not reduce to 10 or 11 digits.
    #[error("invalid phone number: \"{0}\" (expected 10 or 11 digits including the area code)")]
    InvalidPhone(String),

    /// Unknown federative-unit code.
    #[error("unknown federative unit: \"{0}\" (expected a two-letter code such as SP)")]
    InvalidUf(String),

    /// Unknown taxation category identifier.
    #[error("unknown taxation category: \"{0}\" (expected icms_contributor, exempt, or non_contributor)")]
    InvalidTaxation(String),

    /// Unknown person-type identifier.
    #[error("unknown person type: \"{0}\" (expected fisica or juridica)")]
    InvalidPersonType(String),

    /// Unknown gender identifier.
    #[error("unknown gender: \"{0}\" (expected undisclosed, male, female, or other)")]
    InvalidGender(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_cpf_display_carries_input() {
        let err = ValidationError::InvalidCpf("123".to_string());
        let msg = format!("{err}");
        assert!(msg.contains("123"));
        assert!(msg.contains("11 digits"));
    }

    #[test]
    fn invalid_cnpj_display_carries_input() {
        let err = ValidationError::InvalidCnpj("89".to_string());
        let msg = format!("{err}");
        assert!(msg.contains("89"));
        assert!(msg.contains("14 digits"));
    }

    #[test]
    fn invalid_phone_display_states_expected_range() {
        let err = ValidationError::InvalidPhone("99".to_string());
        assert!(format!("{err}").contains("10 or 11 digits"));
    }

    #[test]
    fn invalid_uf_display_names_code_format() {
        let err = ValidationError::InvalidUf("ZZ".to_string());
        let msg = format!("{err}");
        assert!(msg.contains("ZZ"));
        assert!(msg.contains("two-letter"));
    }

    #[test]
    fn invalid_taxation_display_lists_categories() {
        let err = ValidationError::InvalidTaxation("vat".to_string());
        assert!(format!("{err}").contains("icms_contributor"));
    }

    #[test]
    fn all_variants_are_debug() {
        let errors = [
            ValidationError::InvalidCpf("a".to_string()),
            ValidationError::InvalidCnpj("b".to_string()),
            ValidationError::InvalidPhone("c".to_string()),
            ValidationError::InvalidUf("d".to_string()),
            ValidationError::InvalidTaxation("e".to_string()),
            ValidationError::InvalidPersonType("f".to_string()),
            ValidationError::InvalidGender("g".to_string()),
        ];
        for err in errors {
            assert!(!format!("{err:?}").is_empty());
        }
    }
}
