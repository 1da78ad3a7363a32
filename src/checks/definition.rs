//! Check definition types.
//!
//! A [`CheckDefinition`] is a single user-authored expectation about a
//! configuration value. Its serialized form uses the same keys as the
//! editor's import/export format: `label`, `type`, `name`, `value`,
//! `value_type`, `severity`.

use serde::{Deserialize, Serialize};

/// Where the actual value of a check comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SourceKind {
    /// A named entry in the settings store.
    #[default]
    #[serde(rename = "option")]
    Setting,
    /// A boot-time constant.
    #[serde(rename = "constant")]
    Constant,
    /// Activation state of an installed component.
    #[serde(rename = "plugin")]
    ComponentStatus,
}

impl SourceKind {
    /// All source kinds, in editor order.
    pub const ALL: [SourceKind; 3] = [
        SourceKind::Setting,
        SourceKind::Constant,
        SourceKind::ComponentStatus,
    ];

    /// Parse the serialized tag. Returns `None` for unrecognized tags.
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }

    /// The serialized tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Setting => "option",
            SourceKind::Constant => "constant",
            SourceKind::ComponentStatus => "plugin",
        }
    }

    /// Badge text shown next to a result.
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Setting => "Setting / Option",
            SourceKind::Constant => "Config Constant",
            SourceKind::ComponentStatus => "Plugin",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the expected and actual values are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Exact, case-sensitive string equality.
    #[default]
    String,
    /// Loose integer equality.
    Integer,
    /// Truthiness equality.
    Boolean,
}

impl ValueKind {
    /// All value kinds, in editor order.
    pub const ALL: [ValueKind; 3] = [ValueKind::String, ValueKind::Integer, ValueKind::Boolean];

    /// Parse the serialized tag. Returns `None` for unrecognized tags.
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }

    /// The serialized tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Integer => "integer",
            ValueKind::Boolean => "boolean",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Importance tier of a failed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks readiness.
    Critical,
    /// Advisory.
    #[default]
    Recommended,
}

impl Severity {
    /// All severities, in editor order.
    pub const ALL: [Severity; 2] = [Severity::Critical, Severity::Recommended];

    /// Parse the serialized tag. Returns `None` for unrecognized tags.
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|severity| severity.as_str() == tag)
    }

    /// The serialized tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Recommended => "recommended",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single named expectation about a configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckDefinition {
    /// Human-readable description (may be empty).
    #[serde(default)]
    pub label: String,

    /// Which source the actual value is read from.
    #[serde(rename = "type", default)]
    pub source_kind: SourceKind,

    /// Setting key, constant identifier, or component slug.
    pub name: String,

    /// Expected value, always stored as text.
    #[serde(rename = "value", default)]
    pub expected_value: String,

    /// Comparison semantics. Ignored for component checks.
    #[serde(rename = "value_type", default)]
    pub value_kind: ValueKind,

    /// Importance when the check fails.
    #[serde(default)]
    pub severity: Severity,
}

impl CheckDefinition {
    /// Create a check with the default value kind and severity.
    pub fn new(source_kind: SourceKind, name: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            label: String::new(),
            source_kind,
            name: name.into(),
            expected_value: expected.into(),
            value_kind: ValueKind::default(),
            severity: Severity::default(),
        }
    }

    /// Set the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the value kind.
    pub fn with_value_kind(mut self, value_kind: ValueKind) -> Self {
        self.value_kind = value_kind;
        self
    }

    /// Set the severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// The label, or the name when no label was given.
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.name
        } else {
            &self.label
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_kind_tags_round_trip() {
        for kind in SourceKind::ALL {
            assert_eq!(SourceKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(SourceKind::parse("Option"), None);
        assert_eq!(SourceKind::parse(""), None);
    }

    #[test]
    fn value_kind_tags() {
        assert_eq!(ValueKind::parse("integer"), Some(ValueKind::Integer));
        assert_eq!(ValueKind::parse("float"), None);
        assert_eq!(format!("{}", ValueKind::Boolean), "boolean");
    }

    #[test]
    fn severity_tags() {
        assert_eq!(Severity::parse("critical"), Some(Severity::Critical));
        assert_eq!(Severity::parse("blocker"), None);
        assert_eq!(Severity::default(), Severity::Recommended);
    }

    #[test]
    fn defaults_are_safe() {
        assert_eq!(SourceKind::default(), SourceKind::Setting);
        assert_eq!(ValueKind::default(), ValueKind::String);
    }

    #[test]
    fn display_label_falls_back_to_name() {
        let check = CheckDefinition::new(SourceKind::Setting, "blog_public", "1");
        assert_eq!(check.display_label(), "blog_public");

        let check = check.with_label("Search engines may index the site");
        assert_eq!(check.display_label(), "Search engines may index the site");
    }

    #[test]
    fn serializes_with_editor_keys() {
        let check = CheckDefinition::new(SourceKind::ComponentStatus, "acme", "active")
            .with_severity(Severity::Critical);
        let json = serde_json::to_value(&check).unwrap();

        assert_eq!(json["type"], "plugin");
        assert_eq!(json["name"], "acme");
        assert_eq!(json["value"], "active");
        assert_eq!(json["value_type"], "string");
        assert_eq!(json["severity"], "critical");
        assert_eq!(json["label"], "");
    }
}
