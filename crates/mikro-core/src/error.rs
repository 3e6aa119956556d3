//! Error types for the mikro-core library.

use thiserror::Error;

/// Main error type for the mikro library.
///
/// Validation outcomes are never reported through this type; a rejected
/// account is a [`Rejection`] value returned by the validator.
#[derive(Error, Debug)]
pub enum MikroError {
    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Reasons a micro-account number is rejected.
///
/// The display text is the user-facing message shown for each reason.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    #[error("Błąd: Numer rachunku może zawierać tylko cyfry.")]
    NonDigitCharacters,

    /// Carries the sanitized length that was entered.
    #[error("Błąd: Numer rachunku musi mieć 26 cyfr (wpisano {0}).")]
    InvalidLength(usize),

    #[error("Błąd: Nieprawidłowa suma kontrolna numeru mikrorachunku.")]
    ChecksumMismatch,

    #[error("Błąd: Nieprawidłowy numer rozliczeniowy NBP.")]
    NbpNumberMismatch,

    #[error("Błąd: Nieprawidłowy numer uzupełniający NBP.")]
    NbpComplementMismatch,

    #[error("Błąd: Nieprawidłowy wskaźnik typu identyfikatora (musi być 1 dla PESEL lub 2 dla NIP).")]
    InvalidIdentifierIndicator,

    #[error("Błąd: Nieprawidłowa suma kontrolna numeru PESEL.")]
    PeselChecksumFailed,

    #[error("Błąd: Ostatnia cyfra dla PESEL powinna być zerem.")]
    PeselTrailingZeroMismatch,

    #[error("Błąd: Nieprawidłowa suma kontrolna numeru NIP.")]
    NipChecksumFailed,

    #[error("Błąd: Ostatnie dwie cyfry dla NIP powinny być zerami.")]
    NipTrailingZerosMismatch,
}

impl Rejection {
    /// Stable machine-readable name of the reason.
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::NonDigitCharacters => "NonDigitCharacters",
            Rejection::InvalidLength(_) => "InvalidLength",
            Rejection::ChecksumMismatch => "ChecksumMismatch",
            Rejection::NbpNumberMismatch => "NbpNumberMismatch",
            Rejection::NbpComplementMismatch => "NbpComplementMismatch",
            Rejection::InvalidIdentifierIndicator => "InvalidIdentifierIndicator",
            Rejection::PeselChecksumFailed => "PeselChecksumFailed",
            Rejection::PeselTrailingZeroMismatch => "PeselTrailingZeroMismatch",
            Rejection::NipChecksumFailed => "NipChecksumFailed",
            Rejection::NipTrailingZerosMismatch => "NipTrailingZerosMismatch",
        }
    }
}

/// Result type for the mikro library.
pub type Result<T> = std::result::Result<T, MikroError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_invalid_length_message() {
        assert_eq!(
            Rejection::InvalidLength(3).to_string(),
            "Błąd: Numer rachunku musi mieć 26 cyfr (wpisano 3)."
        );
    }

    #[test]
    fn test_catalogue_messages() {
        assert_eq!(
            Rejection::NonDigitCharacters.to_string(),
            "Błąd: Numer rachunku może zawierać tylko cyfry."
        );
        assert_eq!(
            Rejection::InvalidIdentifierIndicator.to_string(),
            "Błąd: Nieprawidłowy wskaźnik typu identyfikatora (musi być 1 dla PESEL lub 2 dla NIP)."
        );
        assert_eq!(
            Rejection::NipTrailingZerosMismatch.to_string(),
            "Błąd: Ostatnie dwie cyfry dla NIP powinny być zerami."
        );
    }

    #[test]
    fn test_code() {
        assert_eq!(Rejection::InvalidLength(30).code(), "InvalidLength");
        assert_eq!(Rejection::ChecksumMismatch.code(), "ChecksumMismatch");
    }
}
