//! NIP (Polish Tax Identification Number) validation.

use super::{parse_digits, weighted_sum};

/// Number of digits in a NIP.
pub const NIP_LENGTH: usize = 10;

const WEIGHTS: [u32; 9] = [6, 5, 7, 2, 3, 4, 5, 6, 7];

/// Compute the NIP control value for a nine-digit base.
///
/// The value is `sum % 11` and may be 10, which no single digit can match.
pub fn nip_control_digit(base: &str) -> Option<u32> {
    let digits = parse_digits(base, NIP_LENGTH - 1)?;
    Some(weighted_sum(&digits, &WEIGHTS) % 11)
}

/// Validate a Polish NIP using the checksum algorithm.
///
/// NIP format: 10 digits where the last digit is a checksum.
/// Weights: 6, 5, 7, 2, 3, 4, 5, 6, 7
pub fn validate_nip(nip: &str) -> bool {
    let Some(digits) = parse_digits(nip, NIP_LENGTH) else {
        return false;
    };

    // A control value of 10 never equals a digit, so it fails here too.
    weighted_sum(&digits[..9], &WEIGHTS) % 11 == digits[9]
}

/// Format NIP with dashes (XXX-XXX-XX-XX).
pub fn format_nip(nip: &str) -> String {
    let digits: String = nip.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() != NIP_LENGTH {
        return nip.to_string();
    }

    format!(
        "{}-{}-{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..8],
        &digits[8..10]
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_nip_valid() {
        assert!(validate_nip("5261040828"));
        assert!(validate_nip("3928621931"));
        assert!(validate_nip("8333290827"));
    }

    #[test]
    fn test_validate_nip_invalid() {
        assert!(!validate_nip("1234567890")); // Invalid checksum
        assert!(!validate_nip("3928621933"));
        assert!(!validate_nip("123456789")); // Too short
        assert!(!validate_nip("12345678901")); // Too long
        assert!(!validate_nip("526-104-08-28")); // Separators are not stripped
    }

    #[test]
    fn test_control_value_ten_is_rejected() {
        assert_eq!(nip_control_digit("100000016"), Some(10));
        for last in 0..10 {
            assert!(!validate_nip(&format!("100000016{}", last)));
        }
    }

    proptest! {
        #[test]
        fn prop_completed_nip_is_valid(base in "[0-9]{9}") {
            let control = nip_control_digit(&base).unwrap();
            prop_assume!(control < 10);
            let nip = format!("{}{}", base, control);
            prop_assert!(validate_nip(&nip));
        }

        #[test]
        fn prop_wrong_control_digit_is_rejected(base in "[0-9]{9}", last in 0u32..10) {
            let control = nip_control_digit(&base).unwrap();
            prop_assume!(control != last);
            let nip = format!("{}{}", base, last);
            prop_assert!(!validate_nip(&nip));
        }
    }

    #[test]
    fn test_format_nip() {
        assert_eq!(format_nip("5261040828"), "526-104-08-28");
        assert_eq!(format_nip("526-104-08-28"), "526-104-08-28");
        assert_eq!(format_nip("52610"), "52610");
    }
}
