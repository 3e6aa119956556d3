//! Core library for Polish tax micro-account validation.
//!
//! This crate provides:
//! - The micro-account validation pipeline (sanitize, structure, NRB checksum,
//!   fixed NBP fields, identifier dispatch, trailing zeros)
//! - PESEL and NIP checksum rules
//! - Validation result models and the rejection catalogue
//! - Pluggable diagnostic trace sinks
//! - Configuration shared by the CLI and WASM front ends

pub mod error;
pub mod models;
pub mod validation;

pub use error::{MikroError, Rejection, Result};
pub use models::account::{Identifier, IdentifierType, MicroAccount, ValidationReport};
pub use models::config::{MikroConfig, ReportFormat};
pub use validation::{MicroAccountValidator, ValidationResult};
pub use validation::trace::{NoopTrace, TraceLog, TraceSink, TracingTrace};
