//! Shared helpers for walking dynamic JSON values
//!
//! Object key order coming out of the decoder is not something the renderers
//! rely on: every format walks keys through [`sorted_entries`] so identical
//! data always renders to identical bytes.

use serde_json::{Map, Value};

/// Placeholder for `null` in the text-like formats
pub const NIL: &str = "nil";

/// Placeholder for an empty array or object in the text-like formats
pub const EMPTY: &str = "(empty)";

/// Object entries in lexicographic key order
pub fn sorted_entries(map: &Map<String, Value>) -> Vec<(&String, &Value)> {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}

/// Sorted keys of an object
pub fn sorted_keys(map: &Map<String, Value>) -> Vec<&String> {
    sorted_entries(map).into_iter().map(|(k, _)| k).collect()
}

/// Deep copy of `value` with every object rebuilt in sorted key order
pub fn normalize(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(normalize).collect()),
        Value::Object(map) => Value::Object(
            sorted_entries(map)
                .into_iter()
                .map(|(k, v)| (k.clone(), normalize(v)))
                .collect(),
        ),
        scalar => scalar.clone(),
    }
}

/// Compact JSON with sorted keys
pub fn compact_json(value: &Value) -> String {
    normalize(value).to_string()
}

/// True for arrays and objects that have at least one child
pub fn is_nested(value: &Value) -> bool {
    match value {
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        _ => false,
    }
}

/// Single-line form of a leaf: scalars, `null`, and empty containers
///
/// Strings are written without quotes.
pub fn leaf_text(value: &Value) -> String {
    match value {
        Value::Null => NIL.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) if !is_nested(value) => EMPTY.to_string(),
        nested => compact_json(nested),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sorted_entries() {
        let value = json!({"b": 2, "a": 1, "c": 3});
        let keys: Vec<&str> = sorted_entries(value.as_object().unwrap())
            .into_iter()
            .map(|(k, _)| k.as_str())
            .collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_normalize_preserves_array_order() {
        let value = json!([{"z": 1, "a": [3, 2, 1]}, null]);
        let normalized = normalize(&value);
        assert_eq!(normalized, value);
        assert_eq!(compact_json(&value), r#"[{"a":[3,2,1],"z":1},null]"#);
    }

    #[test]
    fn test_is_nested() {
        assert!(is_nested(&json!([1])));
        assert!(is_nested(&json!({"a": 1})));
        assert!(!is_nested(&json!([])));
        assert!(!is_nested(&json!({})));
        assert!(!is_nested(&json!("text")));
    }

    #[test]
    fn test_leaf_text() {
        assert_eq!(leaf_text(&Value::Null), "nil");
        assert_eq!(leaf_text(&json!(true)), "true");
        assert_eq!(leaf_text(&json!(1.5)), "1.5");
        assert_eq!(leaf_text(&json!(42)), "42");
        assert_eq!(leaf_text(&json!("")), "");
        assert_eq!(leaf_text(&json!([])), "(empty)");
        assert_eq!(leaf_text(&json!({})), "(empty)");
    }
}
