//! Short readiness summary.

use std::io::Write;

use super::theme::ReportTheme;
use super::{pluralize, ReportFormatter};
use crate::evaluator::{Evaluation, Readiness};

/// Formats a compact status summary.
pub struct SummaryFormatter {
    theme: ReportTheme,
}

impl SummaryFormatter {
    /// Create a new summary formatter.
    pub fn new(use_color: bool) -> Self {
        Self {
            theme: ReportTheme::for_color(use_color),
        }
    }

    /// The sentence describing outstanding failures.
    fn attention_message(readiness: &Readiness) -> String {
        let critical = pluralize(
            readiness.critical_failures.len(),
            "critical issue",
            "critical issues",
        );
        let recommended = pluralize(
            readiness.recommended_failures.len(),
            "recommendation",
            "recommendations",
        );

        match (
            readiness.has_critical(),
            !readiness.recommended_failures.is_empty(),
        ) {
            (true, true) => format!(
                "Your site has {} and {} that need attention.",
                critical, recommended
            ),
            (true, false) => format!(
                "Your site has {} that should be resolved before going live.",
                critical
            ),
            _ => format!(
                "Your site is looking good, but there are {} to improve it further.",
                recommended
            ),
        }
    }
}

impl ReportFormatter for SummaryFormatter {
    fn format<W: Write>(&self, evaluation: &Evaluation, writer: &mut W) -> std::io::Result<()> {
        let readiness = &evaluation.readiness;

        writeln!(
            writer,
            "{} ({}%)",
            self.theme
                .classification(readiness.classification)
                .apply_to(readiness.classification.label()),
            readiness.percentage()
        )?;

        if readiness.total == 0 {
            writeln!(writer, "Configure checks in the settings.")?;
        } else if readiness.all_clear() {
            writeln!(writer, "All checks have passed. Your site is ready to go!")?;
            writeln!(
                writer,
                "Look at the passed checks in the full report (`site-readiness report`)."
            )?;
        } else {
            writeln!(writer, "{}", Self::attention_message(readiness))?;
            writeln!(
                writer,
                "Take a look at the {} in the full report (`site-readiness report`).",
                pluralize(readiness.failed_count(), "item", "items")
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{CheckDefinition, Severity, SourceKind};
    use crate::evaluator::CheckResult;

    fn result(severity: Severity, passed: bool) -> CheckResult {
        let definition = CheckDefinition::new(SourceKind::Constant, "X", "1").with_severity(severity);
        CheckResult::new(&definition, None, passed)
    }

    fn render(results: Vec<CheckResult>) -> String {
        let mut output = Vec::new();
        SummaryFormatter::new(false)
            .format(&Evaluation::from_results(results), &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn no_checks_points_to_settings() {
        let output = render(vec![]);
        assert!(output.contains("No checks configured (100%)"));
        assert!(output.contains("Configure checks in the settings."));
    }

    #[test]
    fn all_clear_summary() {
        let output = render(vec![result(Severity::Critical, true)]);
        assert!(output.starts_with("Good (100%)"));
        assert!(output.contains("ready to go!"));
    }

    #[test]
    fn critical_and_recommended() {
        let output = render(vec![
            result(Severity::Critical, false),
            result(Severity::Recommended, false),
            result(Severity::Recommended, false),
        ]);
        assert!(output.contains("Your site has 1 critical issue and 2 recommendations that need attention."));
        assert!(output.contains("Take a look at the 3 items"));
    }

    #[test]
    fn critical_only() {
        let output = render(vec![
            result(Severity::Critical, false),
            result(Severity::Critical, false),
            result(Severity::Recommended, true),
        ]);
        assert!(output.contains("2 critical issues that should be resolved before going live."));
    }

    #[test]
    fn recommended_only() {
        let output = render(vec![result(Severity::Recommended, false)]);
        assert!(output.contains("there are 1 recommendation to improve it further."));
        assert!(output.contains("Take a look at the 1 item in"));
    }
}
