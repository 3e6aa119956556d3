//! NRB (Polish bank account number) checksum and formatting.
//!
//! A Polish account number is the 26-digit body of a `PL` IBAN: two check
//! digits followed by a 24-digit BBAN. The check digits are verified with the
//! ISO 7064 mod-97 rule after moving them, together with the country code, to
//! the end of the number.

use super::patterns::sanitize;

/// Number of digits in an NRB.
pub const NRB_LENGTH: usize = 26;

/// Country code `PL` with letters mapped to numbers (P=25, L=21).
pub const COUNTRY_DIGITS: &str = "2521";

/// Remainder of a decimal digit string modulo 97.
///
/// Computed digit by digit since 30-digit numbers overflow `u64`.
/// Non-digit characters count as zero.
pub fn mod97(number_str: &str) -> u32 {
    let mut remainder: u32 = 0;

    for c in number_str.chars() {
        let digit = c.to_digit(10).unwrap_or(0);
        remainder = (remainder * 10 + digit) % 97;
    }

    remainder
}

/// Move the check digits and country code behind the BBAN.
pub fn rearrange(check_digits: &str, bban: &str) -> String {
    format!("{}{}{}", bban, COUNTRY_DIGITS, check_digits)
}

/// Mod-97 remainder of a 26-digit account number after rearrangement.
///
/// Returns `None` unless `account` is exactly 26 ASCII digits.
pub fn checksum_remainder(account: &str) -> Option<u32> {
    if account.len() != NRB_LENGTH || !account.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let (check_digits, bban) = account.split_at(2);
    Some(mod97(&rearrange(check_digits, bban)))
}

/// Check the mod-97 checksum of a 26-digit account number.
pub fn is_valid_checksum(account: &str) -> bool {
    checksum_remainder(account) == Some(1)
}

/// Compute the two check digits for a BBAN.
///
/// Returns `None` if the BBAN is empty or contains anything but ASCII digits.
pub fn check_digits(bban: &str) -> Option<String> {
    if bban.is_empty() || !bban.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let remainder = mod97(&rearrange("00", bban));
    Some(format!("{:02}", 98 - remainder))
}

/// Format an account number as `XX XXXX XXXX XXXX XXXX XXXX XXXX`.
///
/// Input that is not 26 digits (ignoring whitespace) is returned unchanged.
pub fn format_nrb(account: &str) -> String {
    let digits = sanitize(account);

    if digits.len() != NRB_LENGTH || !digits.chars().all(|c| c.is_ascii_digit()) {
        return account.to_string();
    }

    let (check, bban) = digits.split_at(2);
    let groups: Vec<&str> = bban
        .as_bytes()
        .chunks(4)
        .filter_map(|chunk| std::str::from_utf8(chunk).ok())
        .collect();

    format!("{} {}", check, groups.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mod97() {
        assert_eq!(mod97("97"), 0);
        assert_eq!(mod97("98"), 1);
        assert_eq!(mod97("101000712222526104082800252116"), 1);
        assert_eq!(mod97(""), 0);
    }

    #[test]
    fn test_rearrange() {
        assert_eq!(rearrange("16", "101000712222526104082800"), "101000712222526104082800252116");
    }

    #[test]
    fn test_checksum_remainder() {
        assert_eq!(checksum_remainder("16101000712222526104082800"), Some(1));
        assert_eq!(checksum_remainder("17101000712222526104082800"), Some(2));
        assert_eq!(checksum_remainder("1610100071222252610408280"), None);
        assert_eq!(checksum_remainder("1610100071222252610408280X"), None);
    }

    #[test]
    fn test_is_valid_checksum() {
        assert!(is_valid_checksum("16101000712222526104082800"));
        assert!(is_valid_checksum("61109010140000071219812874")); // Ordinary bank account
        assert!(!is_valid_checksum("17101000712222526104082800"));
        assert!(!is_valid_checksum("1610100071222252610408280")); // Too short
        assert!(!is_valid_checksum("1610100071222252610408280A"));
    }

    #[test]
    fn test_check_digits() {
        assert_eq!(check_digits("101000712222526104082800").as_deref(), Some("16"));
        assert_eq!(check_digits("101000712221123456789030").as_deref(), Some("11"));
        assert_eq!(check_digits(""), None);
        assert_eq!(check_digits("12 34"), None);
    }

    #[test]
    fn test_altered_check_digits_are_rejected() {
        let bban = "101000712222526104082800";
        let valid = check_digits(bban).unwrap();
        for n in 0..100u32 {
            let candidate = format!("{:02}{}", n, bban);
            assert_eq!(is_valid_checksum(&candidate), format!("{:02}", n) == valid);
        }
    }

    #[test]
    fn test_format_nrb() {
        assert_eq!(
            format_nrb("16101000712222526104082800"),
            "16 1010 0071 2222 5261 0408 2800"
        );
        assert_eq!(
            format_nrb("16 1010 0071 2222 5261 0408 2800"),
            "16 1010 0071 2222 5261 0408 2800"
        );
        assert_eq!(format_nrb("123"), "123");
    }
}
