//! # CPF — Individual Taxpayer Registry Number
//!
//! Validation and canonical handling of the Cadastro de Pessoas Físicas,
//! the 11-digit registry number carried by every Brazilian natural person.
//! The final two digits are check digits: each is a weighted mod-11
//! reduction, the first over the nine base digits, the second over the base
//! digits plus the first check digit.
//!
//! ## Validation Rules
//!
//! 1. Strip display punctuation — only ASCII digits participate.
//! 2. Reject when the digit count is not 11, or when all digits are
//!    identical (`000.000.000-00` through `999.999.999-99` satisfy the
//!    arithmetic but are not issued by the registry).
//! 3. Recompute both check digits and compare them with the submitted ones.
//!
//! Invalid input is an ordinary `false`/`Err` result, never a panic.

use serde::{Deserialize, Serialize};

use crate::digits::{all_identical, check_digit, digit_values, only_digits};
use crate::error::ValidationError;

/// Number of significant digits in a CPF.
pub const CPF_LEN: usize = 11;

/// Weights for the first check digit, over the nine base digits.
const FIRST_WEIGHTS: [u8; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weights for the second check digit, over the base digits plus the first
/// check digit.
const SECOND_WEIGHTS: [u8; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Compute the two check digits for a 9-digit CPF base.
pub(crate) fn cpf_check_digits(base: &[u8]) -> (u8, u8) {
    debug_assert_eq!(base.len(), CPF_LEN - 2);
    let first = check_digit(base, &FIRST_WEIGHTS);
    let mut with_first = [0u8; CPF_LEN - 1];
    with_first[..CPF_LEN - 2].copy_from_slice(base);
    with_first[CPF_LEN - 2] = first;
    let second = check_digit(&with_first, &SECOND_WEIGHTS);
    (first, second)
}

/// Check whether `input` contains a valid CPF.
///
/// Punctuation and any other non-digit characters are stripped before
/// validation, so `"012.345.678-90"` and `"01234567890"` are equivalent.
/// Returns `false` for wrong-length input, repeated-digit sequences, and
/// check-digit mismatches. Never panics.
pub fn is_valid_cpf(input: &str) -> bool {
    let digits = digit_values(input);
    if digits.len() != CPF_LEN || all_identical(&digits) {
        return false;
    }
    let (first, second) = cpf_check_digits(&digits[..CPF_LEN - 2]);
    digits[CPF_LEN - 2] == first && digits[CPF_LEN - 1] == second
}

/// `Result` twin of [`is_valid_cpf`] for the per-field validation step.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidCpf`] carrying the submitted input when
/// it does not validate.
pub fn validate_cpf(input: &str) -> Result<(), ValidationError> {
    if is_valid_cpf(input) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCpf(input.to_string()))
    }
}

/// A validated CPF in canonical 11-digit form.
///
/// The constructor accepts both bare digits (`"11144477735"`) and the
/// punctuated display form (`"111.444.777-35"`); the canonical storage is
/// digits only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cpf(String);

impl Cpf {
    /// Create a CPF from a string value, verifying the check digits.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCpf`] when the input does not reduce
    /// to 11 digits with matching check digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let digits = only_digits(&raw);
        if is_valid_cpf(&digits) {
            Ok(Self(digits))
        } else {
            Err(ValidationError::InvalidCpf(raw))
        }
    }

    /// Access the CPF in canonical 11-digit form (no punctuation).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the CPF in display form: `XXX.XXX.XXX-XX`.
    pub fn formatted(&self) -> String {
        format!(
            "{}.{}.{}-{}",
            &self.0[..3],
            &self.0[3..6],
            &self.0[6..9],
            &self.0[9..]
        )
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}
