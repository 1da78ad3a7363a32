//! Check definitions and their normalization.
//!
//! # Modules
//!
//! - [`definition`] - The check data model and its enumerations
//! - [`sanitize`] - Normalization of raw, loosely typed check records

pub mod definition;
pub mod sanitize;

pub use definition::{CheckDefinition, Severity, SourceKind, ValueKind};
pub use sanitize::{
    sanitize_checks, sanitize_checks_value, sanitize_record, sanitize_text, scalar_text,
};

/// Settings store key holding the configured check list.
pub const CHECKS_OPTION: &str = "site_readiness_checks";
