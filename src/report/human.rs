//! Full human-readable readiness report.
//!
//! Failed checks are grouped by severity, followed by the passed checks.
//! Each check shows its label, source badge and a one-line explanation.

use std::io::Write;

use super::theme::ReportTheme;
use super::{pluralize, ReportFormatter};
use crate::evaluator::{CheckResult, Classification, Evaluation};

/// Formats the full report for terminal display.
pub struct HumanFormatter {
    theme: ReportTheme,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self {
            theme: ReportTheme::for_color(use_color),
        }
    }

    fn write_result<W: Write>(&self, result: &CheckResult, writer: &mut W) -> std::io::Result<()> {
        let (icon, style) = self.theme.outcome(result.outcome());
        writeln!(
            writer,
            "  {} {} {}",
            style.apply_to(icon),
            self.theme.title.apply_to(result.display_label()),
            self.theme
                .dim
                .apply_to(format!("[{}]", result.source_kind.label()))
        )?;

        let name = self.theme.code.apply_to(&result.name);
        let actual = self.theme.code.apply_to(result.actual_display());
        if result.passed {
            writeln!(writer, "      {} is correctly set to {}.", name, actual)
        } else {
            writeln!(
                writer,
                "      {} is expected to be {} but is currently {}.",
                name,
                self.theme.code.apply_to(&result.expected_value),
                actual
            )
        }
    }

    fn write_section<W: Write>(
        &self,
        title: String,
        description: &str,
        results: &[CheckResult],
        writer: &mut W,
    ) -> std::io::Result<()> {
        writeln!(writer)?;
        writeln!(writer, "{}", self.theme.title.apply_to(title))?;
        if !description.is_empty() {
            writeln!(writer, "{}", self.theme.dim.apply_to(description))?;
        }
        for result in results {
            self.write_result(result, writer)?;
        }
        Ok(())
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, evaluation: &Evaluation, writer: &mut W) -> std::io::Result<()> {
        let readiness = &evaluation.readiness;

        writeln!(writer, "{}", self.theme.header.apply_to("Site Readiness Check"))?;
        writeln!(
            writer,
            "{} ({}%)",
            self.theme
                .classification(readiness.classification)
                .apply_to(readiness.classification.label()),
            readiness.percentage()
        )?;

        if readiness.classification == Classification::NoChecksConfigured {
            writeln!(writer)?;
            writeln!(writer, "No checks configured")?;
            writeln!(
                writer,
                "{}",
                self.theme
                    .dim
                    .apply_to("Add checks with `site-readiness import <file>`.")
            )?;
            return Ok(());
        }

        if readiness.all_clear() {
            writeln!(writer)?;
            writeln!(writer, "{}", self.theme.success.apply_to("Great job!"))?;
            writeln!(writer, "All checks have passed. Your site is ready to go.")?;
        }

        if !readiness.critical_failures.is_empty() {
            self.write_section(
                pluralize(
                    readiness.critical_failures.len(),
                    "critical issue",
                    "critical issues",
                ),
                "Critical issues are items that are essential to be fixed before you can publish your site.",
                &readiness.critical_failures,
                writer,
            )?;
        }

        if !readiness.recommended_failures.is_empty() {
            self.write_section(
                pluralize(
                    readiness.recommended_failures.len(),
                    "recommended improvement",
                    "recommended improvements",
                ),
                "Recommended items are improvements that are not essential but would benefit your site.",
                &readiness.recommended_failures,
                writer,
            )?;
        }

        if !readiness.passed.is_empty() {
            self.write_section(
                pluralize(readiness.passed.len(), "passed check", "passed checks"),
                "",
                &readiness.passed,
                writer,
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{CheckDefinition, Severity, SourceKind};
    use serde_json::json;

    fn render(results: Vec<CheckResult>) -> String {
        let evaluation = Evaluation::from_results(results);
        let mut output = Vec::new();
        HumanFormatter::new(false)
            .format(&evaluation, &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn failed(name: &str, severity: Severity) -> CheckResult {
        let definition = CheckDefinition::new(SourceKind::Setting, name, "1").with_severity(severity);
        CheckResult::new(&definition, None, false)
    }

    #[test]
    fn empty_report_says_no_checks() {
        let output = render(vec![]);
        assert!(output.contains("No checks configured"));
        assert!(output.contains("(100%)"));
        assert!(!output.contains("passed check"));
    }

    #[test]
    fn failed_check_explains_expectation() {
        let output = render(vec![failed("blog_public", Severity::Critical)]);
        assert!(output.contains("Should be improved (0%)"));
        assert!(output.contains("1 critical issue"));
        assert!(output.contains("blog_public is expected to be 1 but is currently not set."));
        assert!(output.contains("[Setting / Option]"));
    }

    #[test]
    fn sections_are_pluralized() {
        let output = render(vec![
            failed("a", Severity::Recommended),
            failed("b", Severity::Recommended),
        ]);
        assert!(output.contains("2 recommended improvements"));
        assert!(output.contains("Good, with recommendations"));
        assert!(!output.contains("critical issue"));
    }

    #[test]
    fn all_clear_report() {
        let definition = CheckDefinition::new(SourceKind::ComponentStatus, "acme", "active")
            .with_label("Acme is active");
        let output = render(vec![CheckResult::new(&definition, Some(json!("active")), true)]);

        assert!(output.contains("Great job!"));
        assert!(output.contains("1 passed check"));
        assert!(output.contains("Acme is active [Plugin]"));
        assert!(output.contains("acme is correctly set to active."));
    }
}
