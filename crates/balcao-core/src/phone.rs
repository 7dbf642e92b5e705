//! # Phone Numbers
//!
//! Brazilian telephone numbers as collected by checkout forms: a two-digit
//! area code followed by an eight-digit fixed line or a nine-digit mobile
//! number. A well-formed number therefore reduces to exactly 10 or 11
//! digits once display punctuation is stripped.
//!
//! Checkout collects two numbers — a required contact phone and an optional
//! mobile — so the rule comes in two flavors: the plain validator, and an
//! optional variant that accepts the empty string and defers to the plain
//! rule otherwise.

use serde::{Deserialize, Serialize};

use crate::digits::only_digits;
use crate::error::ValidationError;

/// Accepted digit counts: area code plus subscriber number, with or without
/// the mobile ninth digit.
const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 10..=11;

/// Check whether `input` contains a plausible Brazilian phone number.
///
/// Strips every non-digit character and accepts exactly 10 or 11 remaining
/// digits. Never panics.
pub fn is_valid_phone(input: &str) -> bool {
    PHONE_DIGITS.contains(&only_digits(input).len())
}

/// Optional-field variant of [`is_valid_phone`].
///
/// The empty string is valid (nothing was submitted); any other input is
/// held to the plain rule. Whitespace-only input is not empty and therefore
/// fails.
pub fn is_valid_phone_optional(input: &str) -> bool {
    input.is_empty() || is_valid_phone(input)
}

/// `Result` twin of [`is_valid_phone`] for the per-field validation step.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidPhone`] carrying the submitted input
/// when it does not validate.
pub fn validate_phone(input: &str) -> Result<(), ValidationError> {
    if is_valid_phone(input) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone(input.to_string()))
    }
}

/// `Result` twin of [`is_valid_phone_optional`].
///
/// # Errors
///
/// Returns [`ValidationError::InvalidPhone`] for non-empty input that fails
/// the plain rule.
pub fn validate_phone_optional(input: &str) -> Result<(), ValidationError> {
    if is_valid_phone_optional(input) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone(input.to_string()))
    }
}

/// A validated phone number in canonical digit form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Phone(String);

impl Phone {
    /// Create a phone number from a string value, validating the digit count.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPhone`] when the input does not
    /// reduce to 10 or 11 digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let digits = only_digits(&raw);
        if PHONE_DIGITS.contains(&digits.len()) {
            Ok(Self(digits))
        } else {
            Err(ValidationError::InvalidPhone(raw))
        }
    }

    /// Access the number in canonical digit form (no punctuation).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two-digit area code (DDD).
    pub fn area_code(&self) -> &str {
        &self.0[..2]
    }

    /// True for eleven-digit numbers, which carry the mobile ninth digit.
    pub fn is_mobile(&self) -> bool {
        self.0.len() == 11
    }

    /// Return the number in display form: `(AA) NNNN-NNNN` for fixed lines,
    /// `(AA) NNNNN-NNNN` for mobiles.
    pub fn formatted(&self) -> String {
        let split = self.0.len() - 4;
        format!("({}) {}-{}", &self.0[..2], &self.0[2..split], &self.0[split..])
    }
}

impl std::fmt::Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- is_valid_phone --

    #[test]
    fn accepts_ten_and_eleven_digit_numbers() {
        assert!(is_valid_phone("4352103521"));
        assert!(is_valid_phone("43987654321"));
    }

    #[test]
    fn accepts_punctuated_display_forms() {
        assert!(is_valid_phone("(43) 5210-3521"));
        assert!(is_valid_phone("(11) 98765-4321"));
        // Country-code prefixes push the count past 11 digits.
        assert!(!is_valid_phone("+55 11 98765-4321"));
    }

    #[test]
    fn rejects_too_few_or_too_many_digits() {
        assert!(!is_valid_phone("123"));
        assert!(!is_valid_phone("435210352"));
        assert!(!is_valid_phone("435210352112"));
        assert!(!is_valid_phone(""));
    }

    // -- is_valid_phone_optional --

    #[test]
    fn optional_accepts_empty_input() {
        assert!(is_valid_phone_optional(""));
    }

    #[test]
    fn optional_still_rejects_whitespace_and_short_numbers() {
        assert!(!is_valid_phone_optional("   "));
        assert!(!is_valid_phone_optional("123"));
    }

    #[test]
    fn optional_accepts_well_formed_numbers() {
        assert!(is_valid_phone_optional("4352103521"));
    }

    // -- validate twins --

    #[test]
    fn validate_phone_reports_the_submitted_input() {
        let err = validate_phone("99").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidPhone(ref v) if v == "99"));
        assert!(validate_phone_optional("").is_ok());
    }

    // -- Phone --

    #[test]
    fn new_canonicalizes_and_formats_fixed_lines() {
        let phone = Phone::new("(43) 5210-3521").unwrap();
        assert_eq!(phone.as_str(), "4352103521");
        assert_eq!(phone.area_code(), "43");
        assert!(!phone.is_mobile());
        assert_eq!(phone.formatted(), "(43) 5210-3521");
    }

    #[test]
    fn new_canonicalizes_and_formats_mobiles() {
        let phone = Phone::new("11987654321").unwrap();
        assert!(phone.is_mobile());
        assert_eq!(phone.formatted(), "(11) 98765-4321");
        assert_eq!(phone.to_string(), "(11) 98765-4321");
    }

    #[test]
    fn new_rejects_invalid_input() {
        assert!(Phone::new("").is_err());
        assert!(Phone::new("123").is_err());
    }
}
