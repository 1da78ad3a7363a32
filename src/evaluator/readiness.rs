//! Aggregation of check results into a readiness summary.

use serde::Serialize;

use super::result::CheckResult;
use crate::checks::Severity;

/// Overall readiness classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// No checks are configured.
    NoChecksConfigured,
    /// At least one critical check failed.
    NeedsImprovement,
    /// Only recommended checks failed.
    GoodWithRecommendations,
    /// Every check passed.
    Good,
}

impl Classification {
    /// Headline shown next to the score.
    pub fn label(&self) -> &'static str {
        match self {
            Classification::NoChecksConfigured => "No checks configured",
            Classification::NeedsImprovement => "Should be improved",
            Classification::GoodWithRecommendations => "Good, with recommendations",
            Classification::Good => "Good",
        }
    }

    /// Color class of the score indicator.
    pub fn class(&self) -> &'static str {
        match self {
            Classification::NeedsImprovement => "red",
            Classification::GoodWithRecommendations => "orange",
            Classification::NoChecksConfigured | Classification::Good => "green",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Results partitioned into pass/fail buckets with a score.
///
/// Buckets keep evaluation order. Renderers read pass/fail from here and
/// never re-derive it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Readiness {
    /// Fraction of passing checks, 1.0 when nothing is configured.
    pub score: f64,
    /// Overall classification.
    pub classification: Classification,
    /// Number of evaluated checks.
    pub total: usize,
    /// Checks that passed.
    pub passed: Vec<CheckResult>,
    /// Failed checks with critical severity.
    pub critical_failures: Vec<CheckResult>,
    /// Failed checks with recommended severity.
    pub recommended_failures: Vec<CheckResult>,
}

impl Readiness {
    /// Aggregate an evaluated result list.
    pub fn from_results(results: &[CheckResult]) -> Self {
        let mut passed = Vec::new();
        let mut critical_failures = Vec::new();
        let mut recommended_failures = Vec::new();

        for result in results {
            match (result.passed, result.severity) {
                (true, _) => passed.push(result.clone()),
                (false, Severity::Critical) => critical_failures.push(result.clone()),
                (false, Severity::Recommended) => recommended_failures.push(result.clone()),
            }
        }

        let total = results.len();
        let score = if total == 0 {
            1.0
        } else {
            passed.len() as f64 / total as f64
        };

        let classification = if total == 0 {
            Classification::NoChecksConfigured
        } else if !critical_failures.is_empty() {
            Classification::NeedsImprovement
        } else if !recommended_failures.is_empty() {
            Classification::GoodWithRecommendations
        } else {
            Classification::Good
        };

        Self {
            score,
            classification,
            total,
            passed,
            critical_failures,
            recommended_failures,
        }
    }

    /// Number of failed checks of either severity.
    pub fn failed_count(&self) -> usize {
        self.critical_failures.len() + self.recommended_failures.len()
    }

    /// Whether checks are configured and all of them passed.
    pub fn all_clear(&self) -> bool {
        self.total > 0 && self.failed_count() == 0
    }

    /// Whether any critical check failed.
    pub fn has_critical(&self) -> bool {
        !self.critical_failures.is_empty()
    }

    /// Score as a whole percentage.
    pub fn percentage(&self) -> u8 {
        (self.score * 100.0).round().clamp(0.0, 100.0) as u8
    }
}
