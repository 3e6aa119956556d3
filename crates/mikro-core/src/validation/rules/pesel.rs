//! PESEL (Polish personal identification number) validation.

use super::{parse_digits, weighted_sum};

/// Number of digits in a PESEL.
pub const PESEL_LENGTH: usize = 11;

const WEIGHTS: [u32; 10] = [1, 3, 7, 9, 1, 3, 7, 9, 1, 3];

/// Compute the PESEL control digit for a ten-digit base.
///
/// Returns `None` unless `base` is exactly ten ASCII digits.
pub fn pesel_control_digit(base: &str) -> Option<u32> {
    let digits = parse_digits(base, PESEL_LENGTH - 1)?;
    Some(control_digit(&digits))
}

fn control_digit(digits: &[u32]) -> u32 {
    (10 - weighted_sum(digits, &WEIGHTS) % 10) % 10
}

/// Validate a PESEL using the checksum algorithm.
///
/// PESEL format: 11 digits where the last digit is a checksum.
/// Weights: 1, 3, 7, 9, 1, 3, 7, 9, 1, 3
pub fn validate_pesel(pesel: &str) -> bool {
    match parse_digits(pesel, PESEL_LENGTH) {
        Some(digits) => control_digit(&digits[..10]) == digits[10],
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_pesel_valid() {
        assert!(validate_pesel("12345678903"));
        assert!(validate_pesel("44051401359"));
        // sum % 10 == 0 gives control digit 0
        assert!(validate_pesel("12345678910"));
    }

    #[test]
    fn test_validate_pesel_invalid() {
        assert!(!validate_pesel("12345678901")); // Invalid checksum
        assert!(!validate_pesel("00000000001"));
        assert!(!validate_pesel("1234567890")); // Too short
        assert!(!validate_pesel("123456789030")); // Too long
        assert!(!validate_pesel("1234567890A"));
    }

    proptest! {
        #[test]
        fn prop_completed_pesel_is_valid(base in "[0-9]{10}") {
            let control = pesel_control_digit(&base).unwrap();
            let pesel = format!("{}{}", base, control);
            prop_assert!(validate_pesel(&pesel));
        }

        #[test]
        fn prop_wrong_control_digit_is_rejected(base in "[0-9]{10}", offset in 1u32..10) {
            let control = pesel_control_digit(&base).unwrap();
            let wrong = format!("{}{}", base, (control + offset) % 10);
            prop_assert!(!validate_pesel(&wrong));
        }
    }

    #[test]
    fn test_control_digit_requires_ten_digits() {
        assert_eq!(pesel_control_digit("123456789"), None);
        assert_eq!(pesel_control_digit("12345678901"), None);
        assert_eq!(pesel_control_digit("1234567890"), Some(3));
    }
}
