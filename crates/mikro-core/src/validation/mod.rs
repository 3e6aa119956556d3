//! Micro-account validation pipeline.
//!
//! A tax micro-account is an NRB held at the National Bank of Poland whose
//! digits encode the taxpayer's PESEL or NIP:
//!
//! ```text
//! CC 10100071 222 T IIIIIIIIIII Z   (T = 1, PESEL)
//! CC 10100071 222 T IIIIIIIIII ZZ   (T = 2, NIP)
//! ```
//!
//! Checks run in a fixed order and the first failing one decides the
//! reported [`Rejection`].

pub mod rules;
pub mod trace;

use tracing::debug;

use crate::error::Rejection;
use crate::models::account::{Identifier, IdentifierType, MicroAccount};
use rules::nrb::{self, NRB_LENGTH};
use rules::{is_digits_only, sanitize};
use trace::{NoopTrace, TraceSink};

/// NBP settlement number at offset 2.
pub const NBP_NUMBER: &str = "10100071";

/// NBP complement number at offset 10.
pub const NBP_COMPLEMENT: &str = "222";

/// Offset of the identifier type indicator.
pub const INDICATOR_OFFSET: usize = 13;

/// Offset of the first identifier digit.
pub const IDENTIFIER_OFFSET: usize = 14;

/// Outcome of validating a micro-account number.
pub type ValidationResult = std::result::Result<MicroAccount, Rejection>;

/// Validator for Polish tax micro-account numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct MicroAccountValidator;

impl MicroAccountValidator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self
    }

    /// Validate raw user input.
    pub fn validate(&self, raw: &str) -> ValidationResult {
        self.validate_with_trace(raw, &mut NoopTrace)
    }

    /// Validate raw user input, reporting each step to `sink`.
    pub fn validate_with_trace<S: TraceSink + ?Sized>(
        &self,
        raw: &str,
        sink: &mut S,
    ) -> ValidationResult {
        let result = run_checks(raw, sink);

        match &result {
            Ok(account) => debug!(
                identifier_type = %account.identifier_type(),
                "micro-account accepted"
            ),
            Err(rejection) => debug!(reason = rejection.code(), "micro-account rejected"),
        }

        result
    }
}

fn fail<S: TraceSink + ?Sized>(
    sink: &mut S,
    rejection: Rejection,
    detail: &str,
) -> ValidationResult {
    sink.trace(&format!("Validation failed: {}.", detail));
    Err(rejection)
}

fn run_checks<S: TraceSink + ?Sized>(raw: &str, sink: &mut S) -> ValidationResult {
    sink.trace(&format!("Original input: {}", raw));

    let account = sanitize(raw);
    sink.trace(&format!("After sanitization: {}", account));

    if !is_digits_only(&account) {
        return fail(sink, Rejection::NonDigitCharacters, "non-digit characters");
    }

    // All ASCII from here on, so byte offsets are character offsets.
    if account.len() != NRB_LENGTH {
        sink.trace(&format!("Length: {}", account.len()));
        return fail(sink, Rejection::InvalidLength(account.len()), "incorrect length");
    }
    sink.trace("Length check passed.");

    let (control_sum, rest) = account.split_at(2);
    sink.trace(&format!("Control sum: {}", control_sum));
    sink.trace(&format!("Rest of account: {}", rest));
    sink.trace(&format!(
        "Rearranged account for checksum: {}",
        nrb::rearrange(control_sum, rest)
    ));

    let remainder = nrb::checksum_remainder(&account);
    if let Some(remainder) = remainder {
        sink.trace(&format!("Checksum remainder (modulo 97): {}", remainder));
    }

    if remainder != Some(1) {
        return fail(sink, Rejection::ChecksumMismatch, "checksum (modulo 97) failed");
    }
    sink.trace("Checksum (modulo 97) passed.");

    let nbp_number = &account[2..10];
    let nbp_complement = &account[10..INDICATOR_OFFSET];
    sink.trace(&format!("NBP number: {}", nbp_number));
    sink.trace(&format!("NBP complement: {}", nbp_complement));

    if nbp_number != NBP_NUMBER {
        return fail(sink, Rejection::NbpNumberMismatch, "NBP number mismatch");
    }
    if nbp_complement != NBP_COMPLEMENT {
        return fail(sink, Rejection::NbpComplementMismatch, "NBP complement mismatch");
    }
    sink.trace("NBP elements check passed.");

    let indicator = &account[INDICATOR_OFFSET..IDENTIFIER_OFFSET];
    sink.trace(&format!("Identifier type indicator: {}", indicator));

    let Some(kind) = IdentifierType::from_indicator(indicator) else {
        return fail(
            sink,
            Rejection::InvalidIdentifierIndicator,
            "invalid identifier type indicator",
        );
    };

    let end = IDENTIFIER_OFFSET + kind.length();
    let number = &account[IDENTIFIER_OFFSET..end];
    let trailing = &account[end..];
    sink.trace(&format!("Extracted {}: {}", kind, number));

    let (body, actual) = number.split_at(kind.length() - 1);
    if let Some(calculated) = kind.control_digit(body) {
        sink.trace(&format!(
            "{}: {} Calculated control digit: {} Actual control digit: {}",
            kind, number, calculated, actual
        ));
    }

    if !kind.is_valid(number) {
        let detail = format!("{} checksum failed", kind);
        return fail(sink, kind.checksum_rejection(), &detail);
    }
    sink.trace(&format!("{} checksum passed.", kind));

    if trailing.chars().any(|c| c != '0') {
        let detail = format!("{} trailing zeros mismatch", kind);
        return fail(sink, kind.trailing_rejection(), &detail);
    }
    sink.trace(&format!("{} trailing zeros check passed.", kind));

    let identifier = match kind {
        IdentifierType::Pesel => Identifier::Pesel(number.to_string()),
        IdentifierType::Nip => Identifier::Nip(number.to_string()),
    };

    sink.trace("Validation successful!");
    Ok(MicroAccount::new_unchecked(account, identifier))
}
