//! Response payloads

use serde::Serialize;
use serde_json::Value;

use crate::json::is_truthy;

/// Body of a backend response: parsed JSON, or the raw text when parsing fails.
///
/// Serializes as the JSON value itself or as `{"raw": "<text>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ApiResult {
    Json(Value),
    Raw { raw: String },
}

impl ApiResult {
    /// Parse a response body, keeping the text when it is not JSON.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        serde_json::from_str(text).map_or_else(|_| Self::Raw { raw: text.to_string() }, Self::Json)
    }

    /// Top-level field of a JSON object payload.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Self::Json(value) => value.get(name),
            Self::Raw { .. } => None,
        }
    }

    /// Error detail reported by the backend: the first truthy of `detail`, `error`.
    ///
    /// Strings are used as-is, other values as compact JSON.
    #[must_use]
    pub fn error_detail(&self) -> Option<String> {
        let value = ["detail", "error"]
            .into_iter()
            .filter_map(|name| self.field(name))
            .find(|value| is_truthy(value))?;

        Some(match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}
