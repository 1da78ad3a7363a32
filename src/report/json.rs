//! JSON output formatter.
//!
//! Formats an evaluation as machine-readable JSON for tooling integration.

use std::io::Write;

use serde::Serialize;

use super::ReportFormatter;
use crate::evaluator::{CheckResult, Classification, Evaluation};

/// Formats output as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    /// Emit only the readiness summary, without per-check results.
    pub summary_only: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    results: Option<&'a [CheckResult]>,
    readiness: JsonReadiness,
}

#[derive(Serialize)]
struct JsonReadiness {
    classification: Classification,
    label: &'static str,
    class: &'static str,
    score: f64,
    percentage: u8,
    total: usize,
    passed: usize,
    critical_failures: Vec<String>,
    recommended_failures: Vec<String>,
}

fn names(results: &[CheckResult]) -> Vec<String> {
    results.iter().map(|r| r.name.clone()).collect()
}

impl JsonFormatter {
    /// Create a formatter that includes per-check results.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter that only emits the readiness summary.
    pub fn summary() -> Self {
        Self { summary_only: true }
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, evaluation: &Evaluation, writer: &mut W) -> std::io::Result<()> {
        let readiness = &evaluation.readiness;
        let report = JsonReport {
            results: (!self.summary_only).then_some(evaluation.results.as_slice()),
            readiness: JsonReadiness {
                classification: readiness.classification,
                label: readiness.classification.label(),
                class: readiness.classification.class(),
                score: readiness.score,
                percentage: readiness.percentage(),
                total: readiness.total,
                passed: readiness.passed.len(),
                critical_failures: names(&readiness.critical_failures),
                recommended_failures: names(&readiness.recommended_failures),
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &report)?;
        writeln!(writer)
    }
}
