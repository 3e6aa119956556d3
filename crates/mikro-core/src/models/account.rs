//! Micro-account and taxpayer identifier models.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Rejection;
use crate::validation::rules::nrb::{self, NRB_LENGTH};
use crate::validation::rules::{nip, pesel};
use crate::validation::{
    IDENTIFIER_OFFSET, MicroAccountValidator, NBP_COMPLEMENT, NBP_NUMBER, ValidationResult,
};

/// Message shown for an accepted micro-account.
pub const SUCCESS_MESSAGE: &str = "Numer mikrorachunku jest poprawny.";

/// Kind of taxpayer identifier embedded in a micro-account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IdentifierType {
    /// Personal identification number, indicator `1`.
    Pesel,
    /// Tax identification number, indicator `2`.
    Nip,
}

impl IdentifierType {
    /// Parse the indicator digit found at offset 13.
    pub fn from_indicator(indicator: &str) -> Option<Self> {
        match indicator {
            "1" => Some(IdentifierType::Pesel),
            "2" => Some(IdentifierType::Nip),
            _ => None,
        }
    }

    pub fn indicator(&self) -> char {
        match self {
            IdentifierType::Pesel => '1',
            IdentifierType::Nip => '2',
        }
    }

    /// Number of identifier digits.
    pub fn length(&self) -> usize {
        match self {
            IdentifierType::Pesel => pesel::PESEL_LENGTH,
            IdentifierType::Nip => nip::NIP_LENGTH,
        }
    }

    /// Number of zero digits padding the account after the identifier.
    pub fn trailing_zeros(&self) -> usize {
        NRB_LENGTH - IDENTIFIER_OFFSET - self.length()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IdentifierType::Pesel => "PESEL",
            IdentifierType::Nip => "NIP",
        }
    }

    /// Check the identifier's own checksum.
    pub fn is_valid(&self, number: &str) -> bool {
        match self {
            IdentifierType::Pesel => pesel::validate_pesel(number),
            IdentifierType::Nip => nip::validate_nip(number),
        }
    }

    /// Control value for the identifier body (all digits but the last).
    pub fn control_digit(&self, body: &str) -> Option<u32> {
        match self {
            IdentifierType::Pesel => pesel::pesel_control_digit(body),
            IdentifierType::Nip => nip::nip_control_digit(body),
        }
    }

    pub fn checksum_rejection(&self) -> Rejection {
        match self {
            IdentifierType::Pesel => Rejection::PeselChecksumFailed,
            IdentifierType::Nip => Rejection::NipChecksumFailed,
        }
    }

    pub fn trailing_rejection(&self) -> Rejection {
        match self {
            IdentifierType::Pesel => Rejection::PeselTrailingZeroMismatch,
            IdentifierType::Nip => Rejection::NipTrailingZerosMismatch,
        }
    }
}

impl fmt::Display for IdentifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A taxpayer identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "number", rename_all = "UPPERCASE")]
pub enum Identifier {
    Pesel(String),
    Nip(String),
}

impl Identifier {
    /// Create an identifier, checking its checksum.
    pub fn new(kind: IdentifierType, number: impl Into<String>) -> Result<Self, Rejection> {
        let number = number.into();
        if !kind.is_valid(&number) {
            return Err(kind.checksum_rejection());
        }

        Ok(match kind {
            IdentifierType::Pesel => Identifier::Pesel(number),
            IdentifierType::Nip => Identifier::Nip(number),
        })
    }

    pub fn pesel(number: impl Into<String>) -> Result<Self, Rejection> {
        Self::new(IdentifierType::Pesel, number)
    }

    pub fn nip(number: impl Into<String>) -> Result<Self, Rejection> {
        Self::new(IdentifierType::Nip, number)
    }

    pub fn kind(&self) -> IdentifierType {
        match self {
            Identifier::Pesel(_) => IdentifierType::Pesel,
            Identifier::Nip(_) => IdentifierType::Nip,
        }
    }

    pub fn number(&self) -> &str {
        match self {
            Identifier::Pesel(number) | Identifier::Nip(number) => number,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.number())
    }
}

/// A validated 26-digit micro-account number and its decoded identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MicroAccount {
    number: String,
    identifier: Identifier,
}

impl MicroAccount {
    /// Only the validator builds accounts from checked digits.
    pub(crate) fn new_unchecked(number: String, identifier: Identifier) -> Self {
        Self { number, identifier }
    }

    /// Build the micro-account assigned to a taxpayer identifier.
    ///
    /// The result is run back through the validator, so it always decodes to
    /// the same identifier.
    pub fn generate(identifier: &Identifier) -> ValidationResult {
        let kind = identifier.kind();
        if !kind.is_valid(identifier.number()) {
            return Err(kind.checksum_rejection());
        }

        let bban = format!(
            "{}{}{}{}{}",
            NBP_NUMBER,
            NBP_COMPLEMENT,
            kind.indicator(),
            identifier.number(),
            "0".repeat(kind.trailing_zeros())
        );
        let check = nrb::check_digits(&bban).ok_or(kind.checksum_rejection())?;

        MicroAccountValidator::new().validate(&format!("{}{}", check, bban))
    }

    /// The 26 digits without separators.
    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn control_sum(&self) -> &str {
        &self.number[..2]
    }

    pub fn nbp_number(&self) -> &str {
        &self.number[2..10]
    }

    pub fn nbp_complement(&self) -> &str {
        &self.number[10..13]
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn identifier_type(&self) -> IdentifierType {
        self.identifier.kind()
    }

    pub fn identifier_number(&self) -> &str {
        self.identifier.number()
    }

    /// Full IBAN form with the `PL` country code.
    pub fn iban(&self) -> String {
        format!("PL{}", self.number)
    }

    /// Number grouped as `XX XXXX XXXX XXXX XXXX XXXX XXXX`.
    pub fn formatted(&self) -> String {
        nrb::format_nrb(&self.number)
    }
}

impl fmt::Display for MicroAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// Serializable summary of a validation, for CLI and browser output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Whether the account was accepted.
    pub valid: bool,

    /// User-facing message.
    pub message: String,

    /// Rejection reason code, for rejected accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier_type: Option<IdentifierType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier_number: Option<String>,

    /// Account number, grouped or compact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,

    /// Diagnostic trace lines, if collected.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trace: Vec<String>,
}

impl ValidationReport {
    /// Build a report from a validation result.
    pub fn from_result(result: &ValidationResult) -> Self {
        match result {
            Ok(account) => Self {
                valid: true,
                message: SUCCESS_MESSAGE.to_string(),
                reason: None,
                identifier_type: Some(account.identifier_type()),
                identifier_number: Some(account.identifier_number().to_string()),
                account: Some(account.formatted()),
                trace: Vec::new(),
            },
            Err(rejection) => Self {
                valid: false,
                message: rejection.to_string(),
                reason: Some(rejection.code().to_string()),
                identifier_type: None,
                identifier_number: None,
                account: None,
                trace: Vec::new(),
            },
        }
    }

    /// Show the account without group separators.
    pub fn compact(mut self) -> Self {
        if let Some(account) = self.account.as_mut() {
            account.retain(|c| !c.is_whitespace());
        }
        self
    }

    /// Attach trace lines.
    pub fn with_trace(mut self, trace: Vec<String>) -> Self {
        self.trace = trace;
        self
    }
}
