//! Check evaluation.
//!
//! The [`Evaluator`] resolves and compares every configured check in order,
//! producing one [`CheckResult`] per definition. Checks are independent: an
//! absent or failing check never stops the run, and evaluating the same
//! definitions against unchanged sources always yields the same results.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use site_readiness::checks::{CheckDefinition, SourceKind, ValueKind};
//! use site_readiness::evaluator::{Classification, Evaluator, Readiness};
//! use site_readiness::resolver::{SettingsStore, SourceResolver};
//! use site_readiness::site::Site;
//!
//! let mut site = Site::new();
//! site.set("posts_per_page", json!("10"));
//!
//! let checks = vec![
//!     CheckDefinition::new(SourceKind::Setting, "posts_per_page", "10")
//!         .with_value_kind(ValueKind::Integer),
//! ];
//!
//! let resolver = SourceResolver::new(&site, &site, &site);
//! let results = Evaluator::new(&resolver).evaluate(&checks);
//! assert!(results[0].passed);
//!
//! let readiness = Readiness::from_results(&results);
//! assert_eq!(readiness.classification, Classification::Good);
//! ```
//!
//! # Modules
//!
//! - [`result`] - Per-check results
//! - [`readiness`] - Aggregation into score and classification

pub mod readiness;
pub mod result;

pub use readiness::{Classification, Readiness};
pub use result::{CheckResult, Outcome, NOT_SET};

use serde::Serialize;
use serde_json::Value;

use crate::checks::{sanitize_checks, CheckDefinition, CHECKS_OPTION};
use crate::compare::check_passes;
use crate::resolver::{
    ComponentRegistry, ConstantTable, SettingsStore, SourceResolver, ValueResolver,
};

/// Evaluates check definitions against a resolver.
pub struct Evaluator<'a> {
    resolver: &'a dyn ValueResolver,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator over a resolver.
    pub fn new(resolver: &'a dyn ValueResolver) -> Self {
        Self { resolver }
    }

    /// Evaluate a single definition.
    pub fn evaluate_one(&self, definition: &CheckDefinition) -> CheckResult {
        let actual = self.resolver.resolve(definition);
        let passed = check_passes(definition, actual.as_ref());
        CheckResult::new(definition, actual, passed)
    }

    /// Evaluate all definitions, preserving their order.
    pub fn evaluate(&self, definitions: &[CheckDefinition]) -> Vec<CheckResult> {
        let results: Vec<CheckResult> = definitions
            .iter()
            .map(|definition| self.evaluate_one(definition))
            .collect();

        tracing::debug!(
            total = results.len(),
            passed = results.iter().filter(|r| r.passed).count(),
            "Evaluated checks"
        );
        results
    }
}

/// Read the configured check list from the settings store.
///
/// The stored list is normalized on the way out, so a hand-edited or
/// malformed entry degrades to defaults instead of reaching the evaluator.
pub fn load_checks(store: &dyn SettingsStore) -> Vec<CheckDefinition> {
    let raw = store.get_or(CHECKS_OPTION, Value::Array(Vec::new()));
    sanitize_checks(&raw)
}

/// A complete evaluation run: ordered results plus their aggregate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// Results in definition order.
    pub results: Vec<CheckResult>,
    /// Aggregate readiness of the results.
    pub readiness: Readiness,
}

impl Evaluation {
    /// Aggregate an already evaluated result list.
    pub fn from_results(results: Vec<CheckResult>) -> Self {
        let readiness = Readiness::from_results(&results);
        Self { results, readiness }
    }
}

/// Load the configured checks from a host and evaluate them.
pub fn run<H>(host: &H) -> Evaluation
where
    H: SettingsStore + ConstantTable + ComponentRegistry,
{
    let checks = load_checks(host);
    let resolver = SourceResolver::new(host, host, host);
    Evaluation::from_results(Evaluator::new(&resolver).evaluate(&checks))
}
