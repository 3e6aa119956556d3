//! WASM bindings for Polish tax micro-account validation.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js.

use wasm_bindgen::prelude::*;

use mikro_core::validation::rules;
use mikro_core::{MicroAccountValidator, TraceLog, TraceSink, ValidationReport};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Trace sink that keeps lines and mirrors them to the browser console.
#[derive(Default)]
struct ConsoleTrace {
    log: TraceLog,
    echo: bool,
}

impl TraceSink for ConsoleTrace {
    fn trace(&mut self, line: &str) {
        if self.echo {
            web_sys::console::log_1(&JsValue::from_str(line));
        }
        self.log.trace(line);
    }
}

fn validate_report(raw: &str, echo: bool) -> ValidationReport {
    let mut sink = ConsoleTrace {
        log: TraceLog::new(),
        echo,
    };
    let result = MicroAccountValidator::new().validate_with_trace(raw, &mut sink);
    ValidationReport::from_result(&result).with_trace(sink.log.into_lines())
}

/// Validate a micro-account number.
///
/// Returns a report object with `valid`, `message`, the decoded identifier on
/// success, and the `trace` lines of every step.
#[wasm_bindgen]
pub fn validate_micro_account(raw: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&validate_report(raw, false))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Validate a PESEL (personal identification number).
#[wasm_bindgen]
pub fn validate_pesel(pesel: &str) -> bool {
    rules::validate_pesel(pesel)
}

/// Validate a Polish NIP (tax identification number).
#[wasm_bindgen]
pub fn validate_nip(nip: &str) -> bool {
    rules::validate_nip(nip)
}

/// Micro-account validator class for browser use.
#[wasm_bindgen]
pub struct MicroAccountChecker {
    echo_console: bool,
    last_trace: Vec<String>,
}

#[wasm_bindgen]
impl MicroAccountChecker {
    /// Create a new checker.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            echo_console: false,
            last_trace: Vec::new(),
        }
    }

    /// Mirror trace lines to `console.log` while validating.
    #[wasm_bindgen]
    pub fn set_echo_console(&mut self, echo: bool) {
        self.echo_console = echo;
    }

    /// Validate a micro-account number and keep its trace.
    #[wasm_bindgen]
    pub fn validate(&mut self, raw: &str) -> Result<JsValue, JsValue> {
        let report = validate_report(raw, self.echo_console);
        self.last_trace = report.trace.clone();

        serde_wasm_bindgen::to_value(&report).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Trace lines of the most recent validation.
    #[wasm_bindgen]
    pub fn last_trace(&self) -> js_sys::Array {
        self.last_trace.iter().map(|line| JsValue::from_str(line)).collect()
    }
}

impl Default for MicroAccountChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Formatting helpers for Polish account and identifier numbers.
#[wasm_bindgen]
pub struct PolishAccountUtils;

#[wasm_bindgen]
impl PolishAccountUtils {
    /// Format an account number in groups (XX XXXX XXXX ...).
    #[wasm_bindgen]
    pub fn format_account(account: &str) -> String {
        rules::format_nrb(account)
    }

    /// Format NIP with dashes (XXX-XXX-XX-XX).
    #[wasm_bindgen]
    pub fn format_nip(nip: &str) -> String {
        rules::format_nip(nip)
    }

    /// Remove whitespace from user input.
    #[wasm_bindgen]
    pub fn sanitize(raw: &str) -> String {
        rules::sanitize(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_validate_report() {
        let report = validate_report("16 1010 0071 2222 5261 0408 2800", false);
        assert!(report.valid);
        assert_eq!(report.identifier_number.as_deref(), Some("5261040828"));
        assert_eq!(report.trace.last().map(String::as_str), Some("Validation successful!"));
    }

    #[wasm_bindgen_test]
    fn test_validate_report_rejection() {
        let report = validate_report("123", true);
        assert!(!report.valid);
        assert_eq!(report.reason.as_deref(), Some("InvalidLength"));
    }

    #[wasm_bindgen_test]
    fn test_checksums() {
        assert!(validate_pesel("12345678903"));
        assert!(validate_nip("5261040828"));
        assert!(!validate_nip("1234567890"));
    }

    #[wasm_bindgen_test]
    fn test_format_account() {
        assert_eq!(
            PolishAccountUtils::format_account("16101000712222526104082800"),
            "16 1010 0071 2222 5261 0408 2800"
        );
        assert_eq!(PolishAccountUtils::format_nip("5261040828"), "526-104-08-28");
    }
}
