//! Checksum and format rules used by the micro-account validator.

pub mod nip;
pub mod nrb;
pub mod patterns;
pub mod pesel;

pub use nip::{format_nip, nip_control_digit, validate_nip};
pub use nrb::{check_digits, checksum_remainder, format_nrb, is_valid_checksum, mod97};
pub use patterns::{is_digits_only, sanitize};
pub use pesel::{pesel_control_digit, validate_pesel};

/// Parse `text` into decimal digits, requiring exactly `len` ASCII digits.
pub(crate) fn parse_digits(text: &str, len: usize) -> Option<Vec<u32>> {
    if text.len() != len {
        return None;
    }

    text.chars().map(|c| c.to_digit(10)).collect()
}

/// Weighted digit sum over `weights.len()` leading digits.
pub(crate) fn weighted_sum(digits: &[u32], weights: &[u32]) -> u32 {
    digits.iter().zip(weights.iter()).map(|(d, w)| d * w).sum()
}
