//! Site readiness - configurable go-live checks for a site.
//!
//! A site owner configures a list of checks, each naming a setting, a
//! config constant or a plugin together with the value it should have.
//! The evaluator resolves every check against the live site, compares the
//! actual value with the expected one and aggregates the results into a
//! readiness score and classification.
//!
//! # Modules
//!
//! - [`checks`] - Check definitions and the sanitizer for stored checks
//! - [`cli`] - Command-line interface and argument parsing
//! - [`compare`] - Loose value coercions and pass/fail comparison
//! - [`editor`] - Editable check rows with JSON import and export
//! - [`error`] - Error types and result aliases
//! - [`evaluator`] - Check evaluation and readiness aggregation
//! - [`report`] - Human, summary and JSON report formatters
//! - [`resolver`] - Host data sources and value resolution
//! - [`site`] - File-backed site snapshot implementing the host sources
//!
//! # Example
//!
//! ```
//! use site_readiness::compare::compare;
//! use site_readiness::checks::ValueKind;
//! use serde_json::json;
//!
//! assert!(compare(Some(&json!("10")), "10", ValueKind::Integer));
//! assert!(compare(Some(&json!(true)), "1", ValueKind::Boolean));
//! assert!(!compare(None, "", ValueKind::String));
//! ```
//!
//! For file-based site loading, see the integration tests.

pub mod checks;
pub mod cli;
pub mod compare;
pub mod editor;
pub mod error;
pub mod evaluator;
pub mod report;
pub mod resolver;
pub mod site;

pub use error::{ReadinessError, Result};
