//! Component status lookup by slug.

use serde::{Deserialize, Serialize};

use super::sources::{Component, ComponentRegistry};

/// Installation state of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentState {
    /// Installed and active.
    Active,
    /// Installed but not active.
    Inactive,
    /// No installed component matches the slug.
    NotInstalled,
}

impl ComponentState {
    /// The status string compared against a check's expected value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentState::Active => "active",
            ComponentState::Inactive => "inactive",
            ComponentState::NotInstalled => "not-installed",
        }
    }
}

impl std::fmt::Display for ComponentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a component's file path belongs to the given slug.
///
/// `acme` matches `acme/acme.php` and `acme.php`, not `acme-pro/acme-pro.php`.
pub fn slug_matches(slug: &str, file: &str) -> bool {
    let in_directory = file
        .strip_prefix(slug)
        .is_some_and(|rest| rest.starts_with('/'));
    let single_file = file.strip_suffix(".php") == Some(slug);
    in_directory || single_file
}

/// Find the first component registered under a slug.
pub fn find_component<'a>(registry: &'a dyn ComponentRegistry, slug: &str) -> Option<&'a Component> {
    registry
        .components()
        .iter()
        .find(|component| slug_matches(slug, &component.file))
}

/// Look up the installation state of a component slug.
pub fn component_state(registry: &dyn ComponentRegistry, slug: &str) -> ComponentState {
    match find_component(registry, slug) {
        Some(component) if component.active => ComponentState::Active,
        Some(_) => ComponentState::Inactive,
        None => ComponentState::NotInstalled,
    }
}
