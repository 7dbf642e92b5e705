//! # CNPJ — Company Taxpayer Registry Number
//!
//! Validation and canonical handling of the Cadastro Nacional da Pessoa
//! Jurídica, the 14-digit registry number carried by every Brazilian legal
//! entity. The structure is eight digits of registration, a four-digit
//! branch ordinal (`0001` for a company's head office), and two check
//! digits computed by the same weighted mod-11 scheme as the CPF — only the
//! weight tables and lengths differ.
//!
//! The validation rules mirror [`crate::cpf`]: strip punctuation, reject
//! wrong lengths and all-identical sequences, recompute and compare both
//! check digits.

use serde::{Deserialize, Serialize};

use crate::digits::{all_identical, check_digit, digit_values, only_digits};
use crate::error::ValidationError;

/// Number of significant digits in a CNPJ.
pub const CNPJ_LEN: usize = 14;

/// Weights for the first check digit, over the twelve base digits.
const FIRST_WEIGHTS: [u8; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weights for the second check digit, over the base digits plus the first
/// check digit.
const SECOND_WEIGHTS: [u8; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Compute the two check digits for a 12-digit CNPJ base.
pub(crate) fn cnpj_check_digits(base: &[u8]) -> (u8, u8) {
    debug_assert_eq!(base.len(), CNPJ_LEN - 2);
    let first = check_digit(base, &FIRST_WEIGHTS);
    let mut with_first = [0u8; CNPJ_LEN - 1];
    with_first[..CNPJ_LEN - 2].copy_from_slice(base);
    with_first[CNPJ_LEN - 2] = first;
    let second = check_digit(&with_first, &SECOND_WEIGHTS);
    (first, second)
}

/// Check whether `input` contains a valid CNPJ.
///
/// Punctuation and any other non-digit characters are stripped before
/// validation, so `"89.139.268/0001-12"` and `"89139268000112"` are
/// equivalent. Returns `false` for wrong-length input, repeated-digit
/// sequences, and check-digit mismatches. Never panics.
pub fn is_valid_cnpj(input: &str) -> bool {
    let digits = digit_values(input);
    if digits.len() != CNPJ_LEN || all_identical(&digits) {
        return false;
    }
    let (first, second) = cnpj_check_digits(&digits[..CNPJ_LEN - 2]);
    digits[CNPJ_LEN - 2] == first && digits[CNPJ_LEN - 1] == second
}

/// `Result` twin of [`is_valid_cnpj`] for the per-field validation step.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidCnpj`] carrying the submitted input
/// when it does not validate.
pub fn validate_cnpj(input: &str) -> Result<(), ValidationError> {
    if is_valid_cnpj(input) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCnpj(input.to_string()))
    }
}

/// A validated CNPJ in canonical 14-digit form.
///
/// The constructor accepts both bare digits (`"89139268000112"`) and the
/// punctuated display form (`"89.139.268/0001-12"`); the canonical storage
/// is digits only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cnpj(String);

impl Cnpj {
    /// Create a CNPJ from a string value, verifying the check digits.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCnpj`] when the input does not
    /// reduce to 14 digits with matching check digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let digits = only_digits(&raw);
        if is_valid_cnpj(&digits) {
            Ok(Self(digits))
        } else {
            Err(ValidationError::InvalidCnpj(raw))
        }
    }

    /// Access the CNPJ in canonical 14-digit form (no punctuation).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The four-digit branch ordinal (`0001` for a head office).
    pub fn branch(&self) -> &str {
        &self.0[8..12]
    }

    /// Return the CNPJ in display form: `XX.XXX.XXX/XXXX-XX`.
    pub fn formatted(&self) -> String {
        format!(
            "{}.{}.{}/{}-{}",
            &self.0[..2],
            &self.0[2..5],
            &self.0[5..8],
            &self.0[8..12],
            &self.0[12..]
        )
    }
}

impl std::fmt::Display for Cnpj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any non-degenerate 12-digit base plus its two computed check
        /// digits validates.
        #[test]
        fn round_trip_of_computed_check_digits(base in prop::collection::vec(0u8..=9, 12)) {
            prop_assume!(!crate::digits::all_identical(&base));
            let (first, second) = cnpj_check_digits(&base);
            let mut rendered: String = base.iter().map(|d| char::from(b'0' + d)).collect();
            rendered.push(char::from(b'0' + first));
            rendered.push(char::from(b'0' + second));
            prop_assert!(is_valid_cnpj(&rendered), "rejected {rendered}");
        }

        /// Replacing the first check digit with any other digit invalidates.
        #[test]
        fn any_other_first_check_digit_is_rejected(
            base in prop::collection::vec(0u8..=9, 12),
            wrong in 0u8..=9,
        ) {
            prop_assume!(!crate::digits::all_identical(&base));
            let (first, second) = cnpj_check_digits(&base);
            prop_assume!(wrong != first);
            let mut rendered: String = base.iter().map(|d| char::from(b'0' + d)).collect();
            rendered.push(char::from(b'0' + wrong));
            rendered.push(char::from(b'0' + second));
            prop_assert!(!is_valid_cnpj(&rendered), "accepted {rendered}");
        }
    }
}
