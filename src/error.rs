//! Error types for readiness operations.
//!
//! This module defines [`ReadinessError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Malformed check definitions are never errors: they are normalized by
//!   [`crate::checks::sanitize_checks`] before they reach the evaluator
//! - A missing setting, constant or component is a value, not an error
//! - `ReadinessError` covers the host boundary (site files, editor import)
//! - Use `anyhow::Error` (via `ReadinessError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for readiness operations.
#[derive(Debug, Error)]
pub enum ReadinessError {
    /// Site snapshot file not found at expected location.
    #[error("Site file not found: {path}")]
    SiteNotFound { path: PathBuf },

    /// Failed to parse a site snapshot file.
    #[error("Failed to parse site file at {path}: {message}")]
    SiteParseError { path: PathBuf, message: String },

    /// Imported check list is not valid JSON or not a JSON array.
    #[error("Invalid import: {message}")]
    ImportFormat { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for readiness operations.
pub type Result<T> = std::result::Result<T, ReadinessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_not_found_displays_path() {
        let err = ReadinessError::SiteNotFound {
            path: PathBuf::from("/srv/site.json"),
        };
        assert!(err.to_string().contains("/srv/site.json"));
    }

    #[test]
    fn site_parse_error_displays_path_and_message() {
        let err = ReadinessError::SiteParseError {
            path: PathBuf::from("/site.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/site.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn import_format_displays_message() {
        let err = ReadinessError::ImportFormat {
            message: "expected a JSON array".into(),
        };
        assert!(err.to_string().contains("expected a JSON array"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ReadinessError = io_err.into();
        assert!(matches!(err, ReadinessError::Io(_)));
    }

    #[test]
    fn json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ReadinessError = json_err.into();
        assert!(matches!(err, ReadinessError::Json(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(ReadinessError::ImportFormat {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
