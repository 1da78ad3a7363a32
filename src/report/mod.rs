//! Readiness report formatters.
//!
//! Formatters render an [`Evaluation`] without re-deriving pass/fail:
//!
//! - [`HumanFormatter`] - The full report, grouped by severity
//! - [`SummaryFormatter`] - A short status summary
//! - [`JsonFormatter`] - Machine-readable output for tooling

pub mod human;
pub mod json;
pub mod summary;
pub mod theme;

use std::io::Write;

use crate::evaluator::Evaluation;

/// Trait for formatting an evaluation.
pub trait ReportFormatter {
    /// Format the evaluation to the given writer.
    fn format<W: Write>(&self, evaluation: &Evaluation, writer: &mut W) -> std::io::Result<()>;
}

/// `"1 critical issue"` / `"2 critical issues"`.
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
pub use summary::SummaryFormatter;
pub use theme::{should_use_colors, ReportTheme};
