//! # Digit Utilities
//!
//! Shared digit handling for the registry validators. Brazilian documents
//! circulate with display punctuation (periods, slashes, hyphens) that must
//! be stripped before any arithmetic, and both CPF and CNPJ derive their
//! check digits from the same weighted mod-11 reduction.

/// Strip every character that is not an ASCII digit.
///
/// This is the canonicalization step applied to all document input before
/// validation. It is deliberately indiscriminate: `"012.345.678-90"` and
/// `"cpf 01234567890"` both reduce to the same digit string, and the length
/// check downstream rejects anything that lost or gained digits.
pub fn only_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Numeric values of the ASCII digits in `input`, everything else ignored.
pub(crate) fn digit_values(input: &str) -> Vec<u8> {
    input
        .chars()
        .filter_map(|c| c.to_digit(10).map(|d| d as u8))
        .collect()
}

/// Weighted mod-11 check digit shared by CPF and CNPJ.
///
/// Multiplies each digit by its weight, sums, and reduces modulo 11.
/// Remainders 0 and 1 collapse to a check digit of 0; any other remainder
/// yields `11 - remainder`.
pub(crate) fn check_digit(digits: &[u8], weights: &[u8]) -> u8 {
    debug_assert_eq!(digits.len(), weights.len());
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(d, w)| u32::from(*d) * u32::from(*w))
        .sum();
    match (sum % 11) as u8 {
        0 | 1 => 0,
        remainder => 11 - remainder,
    }
}

/// True when every digit in the sequence is the same.
///
/// Sequences such as `00000000000` satisfy the mod-11 arithmetic but are not
/// issued by the registry; the validators reject them before computing
/// anything.
pub(crate) fn all_identical(digits: &[u8]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- only_digits --

    #[test]
    fn only_digits_strips_document_punctuation() {
        assert_eq!(only_digits("012.345.678-90"), "01234567890");
        assert_eq!(only_digits("89.139.268/0001-12"), "89139268000112");
        assert_eq!(only_digits("(43) 5210-3521"), "4352103521");
    }

    #[test]
    fn only_digits_drops_letters_and_whitespace() {
        assert_eq!(only_digits("cpf: 123 "), "123");
        assert_eq!(only_digits("abc"), "");
        assert_eq!(only_digits(""), "");
    }

    // -- check_digit --

    #[test]
    fn check_digit_remainder_zero_or_one_collapses_to_zero() {
        // 1*9 + 1*2 = 11 -> remainder 0 -> digit 0
        assert_eq!(check_digit(&[1, 1], &[9, 2]), 0);
        // 1*10 + 1*2 = 12 -> remainder 1 -> digit 0
        assert_eq!(check_digit(&[1, 1], &[10, 2]), 0);
    }

    #[test]
    fn check_digit_other_remainders_subtract_from_eleven() {
        // 156 % 11 = 2 -> 9 (the first check digit of 012345678)
        assert_eq!(
            check_digit(&[0, 1, 2, 3, 4, 5, 6, 7, 8], &[10, 9, 8, 7, 6, 5, 4, 3, 2]),
            9
        );
    }

    // -- all_identical --

    #[test]
    fn all_identical_detects_repeated_sequences() {
        assert!(all_identical(&[0; 11]));
        assert!(all_identical(&[7; 14]));
        assert!(!all_identical(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0]));
    }

    #[test]
    fn all_identical_is_vacuous_for_short_sequences() {
        assert!(all_identical(&[]));
        assert!(all_identical(&[5]));
    }
}
