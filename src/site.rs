//! File-backed site snapshot.
//!
//! A [`Site`] stands in for the host environment: it holds the settings
//! store, the constant table and the component registry, and implements
//! all three source traits. Snapshots are read from and written to JSON,
//! or YAML when the file extension is `.yml` / `.yaml`.
//!
//! ```json
//! {
//!   "options": { "blogname": "My Site", "blog_public": "1" },
//!   "constants": { "WP_DEBUG": false },
//!   "plugins": [ { "file": "acme/acme.php", "active": true } ]
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::checks::{sanitize_checks_value, CHECKS_OPTION};
use crate::error::{ReadinessError, Result};
use crate::resolver::{Component, ComponentRegistry, ConstantTable, SettingsStore};

/// Sanitization hook run on a setting before it is stored.
pub type Sanitizer = fn(Value) -> Value;

/// Serialized form of a site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSnapshot {
    /// Settings store contents.
    pub options: Map<String, Value>,

    /// Defined constants.
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub constants: Map<String, Value>,

    /// Installed components, in registry order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<Component>,
}

/// Snapshot file format, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yml") | Some("yaml") => SnapshotFormat::Yaml,
            _ => SnapshotFormat::Json,
        }
    }
}

/// An in-memory site with registered setting sanitizers.
#[derive(Debug, Clone)]
pub struct Site {
    snapshot: SiteSnapshot,
    sanitizers: HashMap<String, Sanitizer>,
}

impl Default for Site {
    fn default() -> Self {
        Self::new()
    }
}

impl Site {
    /// Create an empty site with the check list sanitizer registered.
    pub fn new() -> Self {
        Self::from_snapshot(SiteSnapshot::default())
    }

    /// Wrap a snapshot, registering the check list sanitizer.
    pub fn from_snapshot(snapshot: SiteSnapshot) -> Self {
        let mut site = Self {
            snapshot,
            sanitizers: HashMap::new(),
        };
        site.register_setting(CHECKS_OPTION, sanitize_checks_value);
        site
    }

    /// Load a site snapshot file.
    ///
    /// # Errors
    ///
    /// Returns `SiteNotFound` if the file doesn't exist.
    /// Returns `SiteParseError` if the content is invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ReadinessError::SiteNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ReadinessError::Io(e)
            }
        })?;

        let site = Self::parse(&content, path)?;
        tracing::debug!(
            path = %path.display(),
            options = site.snapshot.options.len(),
            constants = site.snapshot.constants.len(),
            plugins = site.snapshot.plugins.len(),
            "Loaded site"
        );
        Ok(site)
    }

    /// Parse snapshot content. `source_path` selects the format and is used
    /// for error reporting.
    pub fn parse(content: &str, source_path: &Path) -> Result<Self> {
        let parse_error = |message: String| ReadinessError::SiteParseError {
            path: source_path.to_path_buf(),
            message,
        };

        let snapshot: SiteSnapshot = match SnapshotFormat::for_path(source_path) {
            SnapshotFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?
            }
            SnapshotFormat::Json => {
                serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?
            }
        };

        Ok(Self::from_snapshot(snapshot))
    }

    /// Write the snapshot back to a file, in the format its extension selects.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = match SnapshotFormat::for_path(path) {
            SnapshotFormat::Yaml => serde_yaml::to_string(&self.snapshot)
                .map_err(|e| ReadinessError::Other(e.into()))?,
            SnapshotFormat::Json => {
                let mut json = serde_json::to_string_pretty(&self.snapshot)?;
                json.push('\n');
                json
            }
        };

        fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "Saved site");
        Ok(())
    }

    /// Register a sanitizer that runs whenever `key` is written.
    pub fn register_setting(&mut self, key: &str, sanitizer: Sanitizer) {
        self.sanitizers.insert(key.to_string(), sanitizer);
    }

    /// Define a constant.
    pub fn define(&mut self, name: &str, value: Value) {
        self.snapshot.constants.insert(name.to_string(), value);
    }

    /// Add an installed component at the end of the registry.
    pub fn install(&mut self, component: Component) {
        self.snapshot.plugins.push(component);
    }

    /// All setting names, sorted ascending.
    pub fn option_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.snapshot.options.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// The underlying snapshot.
    pub fn snapshot(&self) -> &SiteSnapshot {
        &self.snapshot
    }
}

impl SettingsStore for Site {
    fn get(&self, key: &str) -> Option<&Value> {
        self.snapshot.options.get(key)
    }

    fn set(&mut self, key: &str, value: Value) {
        let value = match self.sanitizers.get(key) {
            Some(sanitize) => sanitize(value),
            None => value,
        };
        self.snapshot.options.insert(key.to_string(), value);
    }
}

impl ConstantTable for Site {
    fn is_defined(&self, name: &str) -> bool {
        self.snapshot.constants.contains_key(name)
    }

    fn value_of(&self, name: &str) -> Option<&Value> {
        self.snapshot.constants.get(name)
    }
}

impl ComponentRegistry for Site {
    fn components(&self) -> &[Component] {
        &self.snapshot.plugins
    }
}
