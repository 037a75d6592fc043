//! Field-level coercion for model-produced JSON objects.
//!
//! Models say "null" when they mean null, send `""` for unknowns, and
//! occasionally return a string where a list was asked for. These helpers turn
//! that into typed values before the validating constructors run.

use serde_json::{Map, Value};

/// Reads an optional text field.
///
/// Missing key, JSON `null`, the literal string `"null"` and `""` all mean
/// absent. Any other non-string value is an error.
pub fn optional_text(object: &Map<String, Value>, key: &str) -> Result<Option<String>, String> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() || s == "null" => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(format!(
            "field '{key}' must be a string, got {}",
            json_type_name(other)
        )),
    }
}

/// Reads a required text field, kept verbatim (no "null" coercion).
pub fn required_text(object: &Map<String, Value>, key: &str) -> Result<String, String> {
    match object.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        None | Some(Value::Null) => Err(format!("missing required field '{key}'")),
        Some(other) => Err(format!(
            "field '{key}' must be a string, got {}",
            json_type_name(other)
        )),
    }
}

/// Reads a list-of-strings field, coercing instead of rejecting.
///
/// A non-array value becomes an empty list. Inside an array, strings are kept,
/// numbers and booleans keep their text form, and anything else is dropped.
pub fn string_list(object: &Map<String, Value>, key: &str) -> Vec<String> {
    let Some(Value::Array(items)) = object.get(key) else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_optional_text_absent_forms() {
        let obj = object(json!({"a": null, "b": "null", "c": ""}));
        assert_eq!(optional_text(&obj, "a").unwrap(), None);
        assert_eq!(optional_text(&obj, "b").unwrap(), None);
        assert_eq!(optional_text(&obj, "c").unwrap(), None);
        assert_eq!(optional_text(&obj, "missing").unwrap(), None);
    }

    #[test]
    fn test_optional_text_keeps_other_strings_verbatim() {
        let obj = object(json!({"email": "john@testcorp.com", "upper": "NULL"}));
        assert_eq!(optional_text(&obj, "email").unwrap().as_deref(), Some("john@testcorp.com"));
        assert_eq!(optional_text(&obj, "upper").unwrap().as_deref(), Some("NULL"));
    }

    #[test]
    fn test_optional_text_rejects_non_strings() {
        let obj = object(json!({"phone": 5550123}));
        let err = optional_text(&obj, "phone").unwrap_err();
        assert!(err.contains("phone"));
        assert!(err.contains("number"));
    }

    #[test]
    fn test_required_text_reports_missing_field() {
        let obj = object(json!({"timeline": null}));
        assert_eq!(required_text(&obj, "scope").unwrap_err(), "missing required field 'scope'");
        assert!(required_text(&obj, "timeline").is_err());
    }

    #[test]
    fn test_string_list_coerces_non_list_to_empty() {
        let obj = object(json!({"needs": "Cloud migration", "other": {"a": 1}, "n": null}));
        assert!(string_list(&obj, "needs").is_empty());
        assert!(string_list(&obj, "other").is_empty());
        assert!(string_list(&obj, "n").is_empty());
        assert!(string_list(&obj, "missing").is_empty());
    }

    #[test]
    fn test_string_list_keeps_scalars_and_drops_structures() {
        let obj = object(json!({"items": ["SSO", 99.9, true, null, ["nested"], {"x": 1}]}));
        assert_eq!(string_list(&obj, "items"), vec!["SSO", "99.9", "true"]);
    }
}
