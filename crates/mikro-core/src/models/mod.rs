//! Data models for micro-account validation.

pub mod account;
pub mod config;
