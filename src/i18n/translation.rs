//! Translation dictionary

use std::collections::HashMap;

use serde_json::Value;

use crate::json::is_truthy;

/// Flat key → text mapping applied to localizable elements.
///
/// Nested dictionaries are flattened with `.` so that `{"menu": {"title": "Menu"}}`
/// is reachable as `menu.title`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationMap {
    /// Flattened entries
    entries: HashMap<String, String>,
}

impl TranslationMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from a parsed dictionary.
    ///
    /// Returns `None` when the document is not a JSON object.
    #[must_use]
    pub fn from_json(json: &Value) -> Option<Self> {
        json.is_object().then(|| Self { entries: flatten_json(json, ".", None) })
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for TranslationMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self { entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

/// Flatten nested JSON object into dot-separated key map.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use tma_bootstrap::i18n::flatten_json;
///
/// let json = json!({
///     "menu": {
///         "title": "Menu",
///         "close": "Close"
///     }
/// });
///
/// let flattened = flatten_json(&json, ".", None);
/// assert_eq!(flattened.get("menu.title"), Some(&"Menu".to_string()));
/// assert_eq!(flattened.get("menu.close"), Some(&"Close".to_string()));
/// ```
#[must_use]
pub fn flatten_json(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
) -> HashMap<String, String> {
    let mut result = HashMap::new();
    flatten_json_value(json, separator, prefix, &mut result);
    result
}

/// Recursive worker for [`flatten_json`]
fn flatten_json_value(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
    result: &mut HashMap<String, String>,
) {
    match json {
        Value::Object(map) => {
            for (key, value) in map {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::Array(arr) => {
            for (index, value) in arr.iter().enumerate() {
                let full_key =
                    prefix.map_or_else(|| format!("[{index}]"), |p| format!("{p}[{index}]"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        // null, false, 0 and "" have no text
        scalar => {
            if let Some(key) = prefix
                && is_truthy(scalar)
            {
                let text = match scalar {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                result.insert(key.to_string(), text);
            }
        }
    }
}
