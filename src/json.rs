//! Nested JSON value traversal.
//! Resolves an ordered key path through `serde_json::Value` objects.

use serde_json::Value;

use crate::error::{OctodirError, Result};

/// Follow `path` through nested JSON objects and return the value it reaches.
///
/// An empty path returns the root value. The lookup fails fast: the error
/// names the first key that cannot be resolved, either because the current
/// value is not an object or because the object lacks that key.
pub fn access_nested<'a>(value: &'a Value, path: &[&str]) -> Result<&'a Value> {
    let mut current = value;
    for key in path {
        current = current
            .as_object()
            .and_then(|object| object.get(*key))
            .ok_or_else(|| OctodirError::MissingKey((*key).to_string()))?;
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn resolves_single_key() {
        let value = json!({"a": 1});
        assert_eq!(access_nested(&value, &["a"]).unwrap(), &json!(1));
    }

    #[test]
    fn resolves_intermediate_object() {
        let value = json!({"a": {"b": 2}});
        assert_eq!(access_nested(&value, &["a"]).unwrap(), &json!({"b": 2}));
    }

    #[test]
    fn resolves_two_levels() {
        let value = json!({"a": {"b": 2}});
        assert_eq!(access_nested(&value, &["a", "b"]).unwrap(), &json!(2));
    }

    #[test]
    fn empty_path_returns_root() {
        let value = json!({"a": 1});
        assert_eq!(access_nested(&value, &[]).unwrap(), &value);
    }

    #[test]
    fn missing_key_in_empty_object() {
        let err = access_nested(&json!({}), &["a"]).unwrap_err();
        assert!(matches!(err, OctodirError::MissingKey(key) if key == "a"));
    }

    #[test]
    fn scalar_mid_path_names_next_key() {
        let err = access_nested(&json!({"a": 1}), &["a", "b"]).unwrap_err();
        assert!(matches!(err, OctodirError::MissingKey(key) if key == "b"));
    }

    #[test]
    fn error_names_first_unresolvable_key() {
        let err = access_nested(&json!({"a": {"b": 2}}), &["a", "c", "d"]).unwrap_err();
        assert!(matches!(err, OctodirError::MissingKey(key) if key == "c"));
    }

    #[test]
    fn non_object_root_fails() {
        let err = access_nested(&json!(42), &["a"]).unwrap_err();
        assert!(matches!(err, OctodirError::MissingKey(key) if key == "a"));
    }

    #[test]
    fn array_is_not_a_mapping() {
        let err = access_nested(&json!({"a": [1, 2]}), &["a", "0"]).unwrap_err();
        assert!(matches!(err, OctodirError::MissingKey(key) if key == "0"));
    }
}
