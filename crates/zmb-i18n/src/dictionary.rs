//! One language's nested key → string mapping.

use serde_json::{Map, Value};

use crate::error::I18nError;

/// A parsed translation dictionary.
///
/// Leaves must be strings; interior nodes must be objects. Lookups walk a
/// dotted key path (`errors.validation.phone`).
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    root: Map<String, Value>,
}

impl Dictionary {
    /// Parse and shape-check a dictionary.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::Dictionary`] when `source` is not JSON, the root
    /// is not an object, or a leaf is not a string.
    pub fn parse(language: &str, source: &str) -> Result<Self, I18nError> {
        let invalid = |reason: String| I18nError::Dictionary {
            language: language.to_string(),
            reason,
        };

        let value: Value = serde_json::from_str(source).map_err(|e| invalid(e.to_string()))?;
        let Value::Object(root) = value else {
            return Err(invalid("root must be an object".to_string()));
        };
        check_leaves(&root, "").map_err(invalid)?;
        Ok(Self { root })
    }

    /// Resolve a dotted key to its string, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        let mut segments = key.split('.');
        let first = segments.next()?;
        let mut node = self.root.get(first)?;
        for segment in segments {
            node = node.as_object()?.get(segment)?;
        }
        node.as_str()
    }

    /// Every dotted key with a string leaf, sorted.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        collect_keys(&self.root, "", &mut keys);
        keys.sort();
        keys
    }
}

fn check_leaves(map: &Map<String, Value>, prefix: &str) -> Result<(), String> {
    for (key, value) in map {
        let path = join(prefix, key);
        match value {
            Value::String(_) => {}
            Value::Object(inner) => check_leaves(inner, &path)?,
            _ => return Err(format!("'{path}' must be a string or an object")),
        }
    }
    Ok(())
}

fn collect_keys(map: &Map<String, Value>, prefix: &str, out: &mut Vec<String>) {
    for (key, value) in map {
        let path = join(prefix, key);
        match value {
            Value::Object(inner) => collect_keys(inner, &path, out),
            _ => out.push(path),
        }
    }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SAMPLE: &str = r#"{"nav":{"home":"Home"},"errors":{"validation":{"phone":"Bad phone"}}}"#;

    #[test]
    fn walks_dotted_paths() {
        let dict = Dictionary::parse("en", SAMPLE).unwrap();
        assert_eq!(dict.get("nav.home"), Some("Home"));
        assert_eq!(dict.get("errors.validation.phone"), Some("Bad phone"));
    }

    #[test]
    fn interior_nodes_and_missing_keys_resolve_to_none() {
        let dict = Dictionary::parse("en", SAMPLE).unwrap();
        assert_eq!(dict.get("nav"), None);
        assert_eq!(dict.get("nav.home.extra"), None);
        assert_eq!(dict.get("nav.missing"), None);
        assert_eq!(dict.get(""), None);
    }

    #[test]
    fn rejects_non_string_leaves() {
        let err = Dictionary::parse("en", r#"{"nav":{"count":3}}"#).unwrap_err();
        assert!(err.to_string().contains("nav.count"));
    }

    #[test]
    fn rejects_non_object_root() {
        assert!(Dictionary::parse("en", r#"["a"]"#).is_err());
        assert!(Dictionary::parse("en", "not json").is_err());
    }

    #[test]
    fn lists_leaf_keys_sorted() {
        let dict = Dictionary::parse("en", SAMPLE).unwrap();
        assert_eq!(dict.keys(), vec!["errors.validation.phone", "nav.home"]);
    }
}
