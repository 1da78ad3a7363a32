//! Resolution of a check's actual value.
//!
//! A [`ValueResolver`] turns a [`CheckDefinition`] into the value currently
//! found in the host. Absence is a normal outcome (`None`), never an error.
//!
//! # Modules
//!
//! - [`sources`] - The injected host stores (settings, constants, components)
//! - [`component`] - Component slug matching and installation state

pub mod component;
pub mod sources;

pub use component::{component_state, find_component, slug_matches, ComponentState};
pub use sources::{Component, ComponentRegistry, ConstantTable, SettingsStore};

use serde_json::Value;

use crate::checks::{CheckDefinition, SourceKind};

/// The resolved value of a check. `None` marks an absent target.
pub type ActualValue = Option<Value>;

/// Resolves the actual value of a check.
///
/// Implementations must be read-only: resolving the same definition twice
/// against unchanged sources yields the same value.
pub trait ValueResolver {
    /// Resolve the current value for a definition.
    fn resolve(&self, definition: &CheckDefinition) -> ActualValue;
}

/// Resolver backed by the three host sources.
pub struct SourceResolver<'a> {
    settings: &'a dyn SettingsStore,
    constants: &'a dyn ConstantTable,
    components: &'a dyn ComponentRegistry,
}

impl<'a> SourceResolver<'a> {
    /// Create a resolver over the given sources.
    pub fn new(
        settings: &'a dyn SettingsStore,
        constants: &'a dyn ConstantTable,
        components: &'a dyn ComponentRegistry,
    ) -> Self {
        Self {
            settings,
            constants,
            components,
        }
    }

    fn resolve_setting(&self, key: &str) -> ActualValue {
        // A stored null is indistinguishable from an unset setting.
        self.settings.get(key).filter(|v| !v.is_null()).cloned()
    }

    fn resolve_constant(&self, name: &str) -> ActualValue {
        if !self.constants.is_defined(name) {
            return None;
        }
        self.constants.value_of(name).filter(|v| !v.is_null()).cloned()
    }

    fn resolve_component(&self, slug: &str) -> ActualValue {
        let state = component_state(self.components, slug);
        Some(Value::String(state.as_str().to_string()))
    }
}

impl ValueResolver for SourceResolver<'_> {
    fn resolve(&self, definition: &CheckDefinition) -> ActualValue {
        let name = definition.name.as_str();
        let actual = match definition.source_kind {
            SourceKind::Setting => self.resolve_setting(name),
            SourceKind::Constant => self.resolve_constant(name),
            SourceKind::ComponentStatus => self.resolve_component(name),
        };

        tracing::trace!(
            source = %definition.source_kind,
            check = name,
            found = actual.is_some(),
            "Resolved check value"
        );
        actual
    }
}
