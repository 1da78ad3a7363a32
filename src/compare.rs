//! Comparison of actual values against expected values.
//!
//! Expected values are always stored as text; the check's [`ValueKind`]
//! decides how both sides are coerced before comparing. Coercion follows
//! loose scalar rules: non-numeric strings count as zero, `"0"` and the
//! empty string are falsy, `true` renders as `"1"`.
//!
//! Component status checks bypass the value kind entirely and compare the
//! status string exactly.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::checks::{CheckDefinition, SourceKind, ValueKind};

/// Leading numeric portion of a string, after leading whitespace.
static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?").expect("NUMERIC_PREFIX must compile")
});

/// Whether a value is truthy.
///
/// `false`, zero, the empty string, `"0"`, and empty lists or maps are falsy.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => match n.as_i64() {
            Some(i) => i != 0,
            None => n.as_f64().is_some_and(|f| f != 0.0),
        },
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Parse the leading integer of a string; anything non-numeric is zero.
///
/// A fractional or exponent tail is honored and then truncated toward zero,
/// so `"3.9"` is 3 and `"1e3"` is 1000.
pub fn parse_int(text: &str) -> i64 {
    let text = text.trim_start_matches([' ', '\t', '\n', '\r', '\x0b', '\x0c']);
    let Some(found) = NUMERIC_PREFIX.find(text) else {
        return 0;
    };
    let prefix = found.as_str();

    if prefix.contains(['.', 'e', 'E']) {
        return prefix.parse::<f64>().map(|f| f as i64).unwrap_or(0);
    }

    prefix.parse::<i64>().unwrap_or_else(|_| {
        if prefix.starts_with('-') {
            i64::MIN
        } else {
            i64::MAX
        }
    })
}

/// Coerce a value to an integer.
pub fn to_int(value: &Value) -> i64 {
    match value {
        Value::Null => 0,
        Value::Bool(b) => i64::from(*b),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|u| i64::try_from(u).unwrap_or(i64::MAX)))
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => parse_int(s),
        Value::Array(items) => i64::from(!items.is_empty()),
        Value::Object(map) => i64::from(!map.is_empty()),
    }
}

/// Coerce a value to its text form.
pub fn to_text(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(false) => String::new(),
        Value::Bool(true) => "1".to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if !n.is_i64() && !n.is_u64() => f.to_string(),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        // Lists and maps are both arrays on the host side.
        Value::Array(_) | Value::Object(_) => "Array".to_string(),
    }
}

/// Compare an actual value against an expected value under a value kind.
///
/// An absent actual value never matches.
pub fn compare(actual: Option<&Value>, expected: &str, kind: ValueKind) -> bool {
    let Some(actual) = actual else {
        return false;
    };

    match kind {
        // Any nonzero integer parse of the expected text counts as true.
        ValueKind::Boolean => (parse_int(expected) != 0) == truthy(actual),
        ValueKind::Integer => to_int(actual) == parse_int(expected),
        ValueKind::String => to_text(actual) == expected,
    }
}

/// Compare a component status string exactly.
pub fn compare_status(actual: Option<&Value>, expected: &str) -> bool {
    matches!(actual, Some(Value::String(status)) if status == expected)
}

/// Decide whether a check passes for the given actual value.
pub fn check_passes(definition: &CheckDefinition, actual: Option<&Value>) -> bool {
    match definition.source_kind {
        SourceKind::ComponentStatus => compare_status(actual, &definition.expected_value),
        SourceKind::Setting | SourceKind::Constant => {
            compare(actual, &definition.expected_value, definition.value_kind)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_never_matches() {
        for kind in ValueKind::ALL {
            assert!(!compare(None, "", kind));
            assert!(!compare(None, "0", kind));
            assert!(!compare(None, "1", kind));
        }
        assert!(!compare_status(None, "not-installed"));
    }

    #[test]
    fn boolean_true_matches_truthy_values() {
        assert!(compare(Some(&json!(true)), "1", ValueKind::Boolean));
        assert!(compare(Some(&json!(1)), "1", ValueKind::Boolean));
        assert!(compare(Some(&json!("1")), "1", ValueKind::Boolean));
        assert!(compare(Some(&json!("yes")), "1", ValueKind::Boolean));
        assert!(!compare(Some(&json!("0")), "1", ValueKind::Boolean));
    }

    #[test]
    fn boolean_false_matches_falsy_values() {
        assert!(compare(Some(&json!(false)), "0", ValueKind::Boolean));
        assert!(compare(Some(&json!(0)), "0", ValueKind::Boolean));
        assert!(compare(Some(&json!("")), "0", ValueKind::Boolean));
        assert!(compare(Some(&json!("0")), "0", ValueKind::Boolean));
        assert!(compare(Some(&json!([])), "0", ValueKind::Boolean));
        assert!(!compare(Some(&json!(true)), "0", ValueKind::Boolean));
    }

    #[test]
    fn boolean_expected_uses_integer_parse() {
        assert!(compare(Some(&json!(true)), "2", ValueKind::Boolean));
        assert!(compare(Some(&json!(true)), "-1", ValueKind::Boolean));
        assert!(compare(Some(&json!(false)), "yes", ValueKind::Boolean));
        assert!(compare(Some(&json!(false)), "", ValueKind::Boolean));
    }

    #[test]
    fn integer_comparison_is_numeric() {
        assert!(compare(Some(&json!("07")), "7", ValueKind::Integer));
        assert!(compare(Some(&json!(7)), "7", ValueKind::Integer));
        assert!(compare(Some(&json!(7.9)), "7", ValueKind::Integer));
        assert!(compare(Some(&json!(true)), "1", ValueKind::Integer));
        assert!(!compare(Some(&json!("8")), "7", ValueKind::Integer));
    }

    #[test]
    fn integer_non_numeric_is_zero() {
        assert!(compare(Some(&json!("abc")), "0", ValueKind::Integer));
        assert!(compare(Some(&json!("abc")), "xyz", ValueKind::Integer));
        assert!(compare(Some(&json!("")), "0", ValueKind::Integer));
    }

    #[test]
    fn string_comparison_is_exact() {
        assert!(!compare(Some(&json!("Dev")), "dev", ValueKind::String));
        assert!(compare(Some(&json!("dev")), "dev", ValueKind::String));
        assert!(compare(Some(&json!(10)), "10", ValueKind::String));
        assert!(compare(Some(&json!(true)), "1", ValueKind::String));
        assert!(compare(Some(&json!(false)), "", ValueKind::String));
        assert!(compare(Some(&json!(2.0)), "2", ValueKind::String));
        assert!(compare(Some(&json!(1.5)), "1.5", ValueKind::String));
    }

    #[test]
    fn parse_int_handles_prefixes() {
        assert_eq!(parse_int("42"), 42);
        assert_eq!(parse_int("  12abc"), 12);
        assert_eq!(parse_int("-3"), -3);
        assert_eq!(parse_int("+5"), 5);
        assert_eq!(parse_int("3.9"), 3);
        assert_eq!(parse_int("1e3"), 1000);
        assert_eq!(parse_int("0x1A"), 0);
        assert_eq!(parse_int("abc"), 0);
        assert_eq!(parse_int(""), 0);
        assert_eq!(parse_int("99999999999999999999"), i64::MAX);
    }

    #[test]
    fn to_text_renders_collections() {
        assert_eq!(to_text(&json!([1])), "Array");
        assert_eq!(to_text(&json!({"a": 1})), "Array");
        assert!(compare(Some(&json!({"a": 1})), "Array", ValueKind::String));
    }

    #[test]
    fn status_comparison_is_exact() {
        let installed = json!("inactive");
        assert!(compare_status(Some(&installed), "inactive"));
        assert!(!compare_status(Some(&installed), "active"));
        assert!(!compare_status(Some(&json!("not-installed")), "active"));
    }

    #[test]
    fn component_checks_ignore_value_kind() {
        let check = CheckDefinition::new(SourceKind::ComponentStatus, "acme", "active")
            .with_value_kind(ValueKind::Boolean);
        assert!(check_passes(&check, Some(&json!("active"))));
        // Truthy under Boolean, but not the expected status.
        assert!(!check_passes(&check, Some(&json!("inactive"))));
    }

    #[test]
    fn setting_checks_use_value_kind() {
        let check = CheckDefinition::new(SourceKind::Setting, "posts_per_page", "10")
            .with_value_kind(ValueKind::Integer);
        assert!(check_passes(&check, Some(&json!("010"))));
        assert!(!check_passes(&check, None));
    }
}
