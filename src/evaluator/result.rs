//! Per-check evaluation results.

use serde::Serialize;
use serde_json::Value;

use crate::checks::{CheckDefinition, Severity, SourceKind};
use crate::compare::to_text;
use crate::resolver::ActualValue;

/// Text shown in place of an absent actual value.
pub const NOT_SET: &str = "not set";

/// How a single result should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The check passed.
    Good,
    /// A critical check failed.
    Critical,
    /// A recommended check failed.
    Recommended,
}

/// The outcome of evaluating one check. Exists only for one evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    /// Label copied from the definition.
    pub label: String,
    /// Name copied from the definition.
    pub name: String,
    /// Source kind copied from the definition.
    #[serde(rename = "type")]
    pub source_kind: SourceKind,
    /// Severity copied from the definition.
    pub severity: Severity,
    /// Expected value copied from the definition.
    #[serde(rename = "expected")]
    pub expected_value: String,
    /// Resolved value, or `None` when the target was absent.
    #[serde(rename = "actual")]
    pub actual_value: ActualValue,
    /// Whether the actual value satisfied the expectation.
    pub passed: bool,
}

impl CheckResult {
    /// Build a result from a definition and its evaluation.
    pub fn new(definition: &CheckDefinition, actual_value: ActualValue, passed: bool) -> Self {
        Self {
            label: definition.label.clone(),
            name: definition.name.clone(),
            source_kind: definition.source_kind,
            severity: definition.severity,
            expected_value: definition.expected_value.clone(),
            actual_value,
            passed,
        }
    }

    /// The label, or the name when no label was given.
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.name
        } else {
            &self.label
        }
    }

    /// The actual value as text, or [`NOT_SET`] when absent.
    pub fn actual_display(&self) -> String {
        self.actual_value
            .as_ref()
            .map(to_text)
            .unwrap_or_else(|| NOT_SET.to_string())
    }

    /// Whether the target was absent.
    pub fn is_absent(&self) -> bool {
        self.actual_value.is_none()
    }

    /// Presentation outcome derived from pass state and severity.
    pub fn outcome(&self) -> Outcome {
        match (self.passed, self.severity) {
            (true, _) => Outcome::Good,
            (false, Severity::Critical) => Outcome::Critical,
            (false, Severity::Recommended) => Outcome::Recommended,
        }
    }

    /// Raw actual value, if present.
    pub fn actual(&self) -> Option<&Value> {
        self.actual_value.as_ref()
    }
}
