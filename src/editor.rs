//! Check list editor.
//!
//! [`CheckEditor`] models the settings editor: an ordered list of raw rows
//! that can be added, removed, imported and exported as JSON, and saved to
//! the settings store. Rows hold the form's text values as-is; cleaning
//! happens in the store's sanitization hook on save.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::checks::{scalar_text, SourceKind, ValueKind, CHECKS_OPTION};
use crate::error::{ReadinessError, Result};
use crate::resolver::SettingsStore;

/// One editable check row, in import/export form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorRow {
    /// Check label.
    pub label: String,
    /// Source tag (`option`, `constant`, `plugin`).
    #[serde(rename = "type")]
    pub source: String,
    /// Setting key, constant identifier, or component slug.
    pub name: String,
    /// Expected value.
    pub value: String,
    /// Value kind tag (`string`, `integer`, `boolean`).
    pub value_type: String,
    /// Severity tag (`critical`, `recommended`).
    pub severity: String,
}

impl Default for EditorRow {
    fn default() -> Self {
        Self {
            label: String::new(),
            source: SourceKind::Setting.as_str().to_string(),
            name: String::new(),
            value: String::new(),
            value_type: ValueKind::String.as_str().to_string(),
            severity: "recommended".to_string(),
        }
    }
}

impl EditorRow {
    /// Build a row from an imported record, filling missing fields with
    /// defaults. Non-object records become default rows.
    fn from_record(record: &Value) -> Self {
        let mut row = Self::default();
        let Some(fields) = record.as_object() else {
            return row;
        };

        let slots: [(&str, &mut String); 6] = [
            ("label", &mut row.label),
            ("type", &mut row.source),
            ("name", &mut row.name),
            ("value", &mut row.value),
            ("value_type", &mut row.value_type),
            ("severity", &mut row.severity),
        ];
        for (key, slot) in slots {
            match fields.get(key) {
                None | Some(Value::Null) => {}
                Some(value) => *slot = scalar_text(value),
            }
        }
        row
    }

    /// Switch the source kind.
    pub fn set_source_kind(&mut self, kind: SourceKind) {
        self.source = kind.as_str().to_string();
    }

    /// Switch the value kind. Boolean rows only hold `"1"` or `"0"`.
    pub fn set_value_kind(&mut self, kind: ValueKind) {
        self.value_type = kind.as_str().to_string();
        if kind == ValueKind::Boolean && self.value != "0" {
            self.value = "1".to_string();
        }
    }
}

/// Editable, ordered list of check rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckEditor {
    rows: Vec<EditorRow>,
}

impl CheckEditor {
    /// Create an empty editor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the rows currently saved in the settings store.
    pub fn from_store(store: &dyn SettingsStore) -> Self {
        let rows = match store.get(CHECKS_OPTION) {
            Some(Value::Array(records)) => records.iter().map(EditorRow::from_record).collect(),
            _ => Vec::new(),
        };
        Self { rows }
    }

    /// Current rows.
    pub fn rows(&self) -> &[EditorRow] {
        &self.rows
    }

    /// Mutable access to a row.
    pub fn row_mut(&mut self, index: usize) -> Option<&mut EditorRow> {
        self.rows.get_mut(index)
    }

    /// Append a default row and return its index.
    pub fn add_row(&mut self) -> usize {
        self.rows.push(EditorRow::default());
        self.rows.len() - 1
    }

    /// Append a row and return its index.
    pub fn push(&mut self, row: EditorRow) -> usize {
        self.rows.push(row);
        self.rows.len() - 1
    }

    /// Remove a row, returning it if the index existed.
    pub fn remove_row(&mut self, index: usize) -> Option<EditorRow> {
        (index < self.rows.len()).then(|| self.rows.remove(index))
    }

    /// Export the rows as a pretty-printed JSON array.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.rows)?)
    }

    /// Replace all rows with an imported JSON array.
    ///
    /// # Errors
    ///
    /// Returns `ImportFormat` if the payload is not JSON or not an array.
    /// The current rows are left untouched in that case.
    pub fn import_json(&mut self, payload: &str) -> Result<usize> {
        let parsed: Value =
            serde_json::from_str(payload).map_err(|e| ReadinessError::ImportFormat {
                message: format!("not valid JSON ({})", e),
            })?;

        let Value::Array(records) = parsed else {
            return Err(ReadinessError::ImportFormat {
                message: "expected a JSON array of checks".to_string(),
            });
        };

        self.rows = records.iter().map(EditorRow::from_record).collect();
        tracing::debug!(rows = self.rows.len(), "Imported check rows");
        Ok(self.rows.len())
    }

    /// Save the rows to the settings store.
    ///
    /// The store's sanitization hook normalizes the rows and drops those
    /// without a name.
    pub fn save(&self, store: &mut dyn SettingsStore) -> Result<()> {
        store.set(CHECKS_OPTION, serde_json::to_value(&self.rows)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::load_checks;
    use crate::site::Site;

    #[test]
    fn added_row_has_defaults() {
        let mut editor = CheckEditor::new();
        let index = editor.add_row();
        let row = &editor.rows()[index];
        assert_eq!(row.source, "option");
        assert_eq!(row.value_type, "string");
        assert_eq!(row.severity, "recommended");
        assert!(row.label.is_empty());
    }

    #[test]
    fn import_fills_missing_fields() {
        let mut editor = CheckEditor::new();
        let count = editor
            .import_json(r#"[{"name": "blogname"}, {"name": "WP_DEBUG", "type": "constant", "value": 0}]"#)
            .unwrap();

        assert_eq!(count, 2);
        let rows = editor.rows();
        assert_eq!(rows[0].label, "");
        assert_eq!(rows[0].source, "option");
        assert_eq!(rows[0].value_type, "string");
        assert_eq!(rows[0].severity, "recommended");
        assert_eq!(rows[1].source, "constant");
        assert_eq!(rows[1].value, "0");
    }

    #[test]
    fn import_non_array_leaves_rows_untouched() {
        let mut editor = CheckEditor::new();
        editor.import_json(r#"[{"name": "keep"}]"#).unwrap();
        let before = editor.clone();

        let err = editor.import_json(r#"{"name": "x"}"#).unwrap_err();
        assert!(matches!(err, ReadinessError::ImportFormat { .. }));
        assert_eq!(editor, before);

        let err = editor.import_json("not json").unwrap_err();
        assert!(matches!(err, ReadinessError::ImportFormat { .. }));
        assert_eq!(editor, before);
    }

    #[test]
    fn import_replaces_existing_rows() {
        let mut editor = CheckEditor::new();
        editor.add_row();
        editor.add_row();
        editor.import_json(r#"[{"name": "only"}]"#).unwrap();
        assert_eq!(editor.rows().len(), 1);
        assert_eq!(editor.rows()[0].name, "only");
    }

    #[test]
    fn non_object_records_become_default_rows() {
        let mut editor = CheckEditor::new();
        editor.import_json(r#"[42, null]"#).unwrap();
        assert_eq!(editor.rows(), [EditorRow::default(), EditorRow::default()]);
    }

    #[test]
    fn export_uses_editor_keys() {
        let mut editor = CheckEditor::new();
        editor.add_row();
        let exported: Value = serde_json::from_str(&editor.export_json().unwrap()).unwrap();
        let keys: Vec<_> = exported[0].as_object().unwrap().keys().cloned().collect();
        for key in ["label", "type", "name", "value", "value_type", "severity"] {
            assert!(keys.iter().any(|k| k == key), "missing {}", key);
        }
    }

    #[test]
    fn remove_row_by_index() {
        let mut editor = CheckEditor::new();
        editor.add_row();
        assert!(editor.remove_row(3).is_none());
        assert!(editor.remove_row(0).is_some());
        assert!(editor.rows().is_empty());
    }

    #[test]
    fn switching_to_boolean_normalizes_value() {
        let mut row = EditorRow {
            value: "yes".to_string(),
            ..EditorRow::default()
        };
        row.set_value_kind(ValueKind::Boolean);
        assert_eq!(row.value, "1");

        row.value = "0".to_string();
        row.set_value_kind(ValueKind::Boolean);
        assert_eq!(row.value, "0");

        row.set_source_kind(SourceKind::ComponentStatus);
        assert_eq!(row.source, "plugin");
    }

    #[test]
    fn save_sanitizes_through_store() {
        let mut site = Site::new();
        let mut editor = CheckEditor::new();
        editor
            .import_json(r#"[{"name": " blogname ", "severity": "urgent"}, {"label": "unnamed"}]"#)
            .unwrap();
        editor.save(&mut site).unwrap();

        let checks = load_checks(&site);
        assert_eq!(checks.len(), 1);
        assert_eq!(checks[0].name, "blogname");

        let reloaded = CheckEditor::from_store(&site);
        assert_eq!(reloaded.rows().len(), 1);
        assert_eq!(reloaded.rows()[0].severity, "recommended");
    }
}
