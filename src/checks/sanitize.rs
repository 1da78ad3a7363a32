//! Normalization of raw check records.
//!
//! Check lists arrive as loosely typed JSON from the settings store or from
//! an editor import. [`sanitize_checks`] turns them into well-formed
//! [`CheckDefinition`]s: unknown enum tags fall back to their defaults,
//! text fields are cleaned, and records without a name are dropped.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use super::definition::{CheckDefinition, Severity, SourceKind, ValueKind};

/// Markup tags: `<` followed by a letter, `/`, `!` or `?`, closed by `>`.
/// A bare `<` is ordinary text.
static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<[A-Za-z/!?][^<>]*>").expect("TAG_REGEX must compile")
});

/// Runs of whitespace, line breaks and tabs.
static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_REGEX must compile"));

/// Clean a single-line text field.
///
/// Strips markup tags, collapses whitespace runs to one space and trims.
/// A `<` that does not open a tag is kept as-is.
pub fn sanitize_text(raw: &str) -> String {
    let stripped = TAG_REGEX.replace_all(raw, "");
    WHITESPACE_REGEX
        .replace_all(&stripped, " ")
        .trim()
        .to_string()
}

/// Render a scalar JSON value as text the way a form field would hold it.
///
/// Lists, maps and null become the empty string.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

fn text_field(record: &Map<String, Value>, key: &str) -> String {
    record
        .get(key)
        .map(|v| sanitize_text(&scalar_text(v)))
        .unwrap_or_default()
}

fn tag_field<'a>(record: &'a Map<String, Value>, key: &str) -> &'a str {
    record.get(key).and_then(Value::as_str).unwrap_or_default()
}

/// Normalize a single raw record.
///
/// Returns `None` when the record has no usable name.
pub fn sanitize_record(raw: &Value) -> Option<CheckDefinition> {
    let empty = Map::new();
    let record = raw.as_object().unwrap_or(&empty);

    let name = text_field(record, "name");
    if name.is_empty() {
        return None;
    }

    Some(CheckDefinition {
        label: text_field(record, "label"),
        source_kind: SourceKind::parse(tag_field(record, "type")).unwrap_or_default(),
        name,
        expected_value: text_field(record, "value"),
        value_kind: ValueKind::parse(tag_field(record, "value_type")).unwrap_or_default(),
        severity: Severity::parse(tag_field(record, "severity")).unwrap_or_default(),
    })
}

/// Normalize a raw check list.
///
/// A value that is not a list yields an empty list.
pub fn sanitize_checks(raw: &Value) -> Vec<CheckDefinition> {
    let Some(records) = raw.as_array() else {
        if !raw.is_null() {
            tracing::debug!("Check list is not a list, treating it as empty");
        }
        return Vec::new();
    };

    let checks: Vec<CheckDefinition> = records.iter().filter_map(sanitize_record).collect();
    if checks.len() != records.len() {
        tracing::debug!(
            "Dropped {} check record(s) without a name",
            records.len() - checks.len()
        );
    }
    checks
}

/// Sanitization hook for the settings store.
///
/// Takes the raw value about to be written and returns the normalized list
/// in its serialized form.
pub fn sanitize_checks_value(raw: Value) -> Value {
    let checks = sanitize_checks(&raw);
    serde_json::to_value(checks).unwrap_or_else(|_| Value::Array(Vec::new()))
}
