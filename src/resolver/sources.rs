//! Host-owned value sources.
//!
//! The evaluator never reaches for global state. Each source is injected
//! through one of these traits and is only ever read during evaluation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A persistent key-value settings store.
pub trait SettingsStore {
    /// Current value of a setting, if set.
    fn get(&self, key: &str) -> Option<&Value>;

    /// Write a setting. Implementations run any sanitization hook
    /// registered for the key before storing.
    fn set(&mut self, key: &str, value: Value);

    /// Current value of a setting, or `default` when unset.
    fn get_or(&self, key: &str, default: Value) -> Value {
        self.get(key).cloned().unwrap_or(default)
    }
}

/// A table of boot-time constants. Read-only at runtime.
pub trait ConstantTable {
    /// Whether a constant with this name is defined.
    fn is_defined(&self, name: &str) -> bool;

    /// Value of a defined constant.
    fn value_of(&self, name: &str) -> Option<&Value>;
}

/// An installed component, identified by its main file path
/// (for example `acme/acme.php`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Path of the component's main file, relative to the components directory.
    pub file: String,
    /// Whether the component is active.
    #[serde(default)]
    pub active: bool,
}

impl Component {
    /// Create a component entry.
    pub fn new(file: impl Into<String>, active: bool) -> Self {
        Self {
            file: file.into(),
            active,
        }
    }
}

/// The installed-components registry.
pub trait ComponentRegistry {
    /// All installed components, in registry order.
    fn components(&self) -> &[Component];
}
