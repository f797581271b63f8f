use std::time::Duration;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;
use url::Url;

use crate::client::HttpClientConfig;

/// Settings file looked up in the workspace directory.
pub const SETTINGS_FILE_NAME: &str = ".mini-app.json";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "endpoints.me")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MiniAppSettings {
    /// Origin the mini app is served from; endpoint paths are joined onto it.
    pub base_url: String,

    pub endpoints: EndpointPaths,

    /// Environment variable holding host-provided init data.
    pub init_data_env: String,

    /// Overall request timeout. Unset means no timeout.
    pub request_timeout_secs: Option<u64>,

    pub user_agent: Option<String>,

    /// Page elements rendered above the output.
    pub elements: Vec<ElementSettings>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EndpointPaths {
    pub translations: String,
    pub me: String,
    pub status: String,
}

/// One element of the page (`<p id="..." data-i18n="...">text</p>`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementSettings {
    pub id: Option<String>,
    pub i18n: Option<String>,
    pub text: String,
}

/// Resolved endpoint URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub translations: Url,
    pub me: Url,
    pub status: Url,
}

impl MiniAppSettings {
    /// # Errors
    /// - Invalid or non-HTTP base URL
    /// - Empty or relative endpoint path
    /// - Empty environment variable name
    /// - Zero timeout
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        match Url::parse(&self.base_url) {
            Ok(url) if !matches!(url.scheme(), "http" | "https") => {
                errors.push(ValidationError::new(
                    "baseUrl",
                    format!("Unsupported scheme '{}'. Use http or https", url.scheme()),
                ));
            }
            Ok(_) => {}
            Err(e) => {
                errors.push(ValidationError::new(
                    "baseUrl",
                    format!("Invalid URL '{}': {e}. Example: \"https://example.org\"", self.base_url),
                ));
            }
        }

        for (name, path) in [
            ("translations", &self.endpoints.translations),
            ("me", &self.endpoints.me),
            ("status", &self.endpoints.status),
        ] {
            if path.is_empty() {
                errors.push(ValidationError::new(
                    format!("endpoints.{name}"),
                    "The path cannot be empty. Example: \"/api/mini-app/me\"",
                ));
            } else if !path.starts_with('/') {
                errors.push(ValidationError::new(
                    format!("endpoints.{name}"),
                    format!("The path '{path}' must start with '/'"),
                ));
            }
        }

        if self.init_data_env.is_empty() {
            errors.push(ValidationError::new(
                "initDataEnv",
                "The variable name cannot be empty. Example: \"TMA_INIT_DATA\"",
            ));
        }

        if self.request_timeout_secs == Some(0) {
            errors.push(ValidationError::new(
                "requestTimeoutSecs",
                "The timeout must be at least 1 second, or remove this field to wait forever",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Join endpoint paths onto the base URL.
    ///
    /// # Errors
    /// Returns an error if the base URL or a path cannot be parsed.
    pub fn endpoint_urls(&self) -> Result<Endpoints, url::ParseError> {
        let base = Url::parse(&self.base_url)?;
        Ok(Endpoints {
            translations: base.join(&self.endpoints.translations)?,
            me: base.join(&self.endpoints.me)?,
            status: base.join(&self.endpoints.status)?,
        })
    }

    #[must_use]
    pub fn http_client_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            user_agent: self.user_agent.clone(),
        }
    }
}

impl Default for EndpointPaths {
    fn default() -> Self {
        Self {
            translations: "/mini-app/translations.json".to_string(),
            me: "/api/mini-app/me".to_string(),
            status: "/api/mini-app/status".to_string(),
        }
    }
}

impl Default for MiniAppSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            endpoints: EndpointPaths::default(),
            init_data_env: "TMA_INIT_DATA".to_string(),
            request_timeout_secs: None,
            user_agent: None,
            elements: vec![ElementSettings {
                id: Some("title".to_string()),
                i18n: Some("title".to_string()),
                text: "Mini App".to_string(),
            }],
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn validate_valid_settings() {
        let settings = MiniAppSettings::default();

        assert_that!(settings.validate(), ok(anything()));
    }

    #[rstest]
    fn deserialize_partial_settings() {
        let json = r#"{"baseUrl": "https://bot.example.org", "endpoints": {"me": "/v2/me"}}"#;

        let settings: MiniAppSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.base_url, eq("https://bot.example.org"));
        assert_that!(settings.endpoints.me, eq("/v2/me"));
        assert_that!(settings.endpoints.status, eq("/api/mini-app/status"));
        assert_that!(settings.init_data_env, eq("TMA_INIT_DATA"));
    }

    #[rstest]
    fn deserialize_empty_settings() {
        let json = "{}";

        let settings: MiniAppSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings, eq(&MiniAppSettings::default()));
    }

    #[rstest]
    fn validate_invalid_base_url() {
        let settings =
            MiniAppSettings { base_url: "not a url".to_string(), ..MiniAppSettings::default() };

        assert_that!(
            settings.validate(),
            err(elements_are![all![
                field!(ValidationError.field_path, eq("baseUrl")),
                field!(ValidationError.message, contains_substring("Invalid URL"))
            ]])
        );
    }

    #[rstest]
    fn validate_unsupported_scheme() {
        let settings = MiniAppSettings {
            base_url: "ftp://example.org".to_string(),
            ..MiniAppSettings::default()
        };

        assert_that!(
            settings.validate(),
            err(elements_are![all![
                field!(ValidationError.field_path, eq("baseUrl")),
                field!(ValidationError.message, contains_substring("Unsupported scheme 'ftp'"))
            ]])
        );
    }

    #[rstest]
    #[case("", "endpoints.me", "cannot be empty")]
    #[case("api/me", "endpoints.me", "must start with '/'")]
    fn validate_invalid_endpoint_path(
        #[case] path: &str,
        #[case] field_path: &str,
        #[case] message: &str,
    ) {
        let settings = MiniAppSettings {
            endpoints: EndpointPaths { me: path.to_string(), ..EndpointPaths::default() },
            ..MiniAppSettings::default()
        };

        assert_that!(
            settings.validate(),
            err(elements_are![all![
                field!(ValidationError.field_path, eq(field_path)),
                field!(ValidationError.message, contains_substring(message))
            ]])
        );
    }

    #[rstest]
    fn endpoint_urls_join_base() {
        let settings = MiniAppSettings {
            base_url: "https://bot.example.org/app/".to_string(),
            ..MiniAppSettings::default()
        };

        let endpoints = settings.endpoint_urls().unwrap();

        assert_that!(
            endpoints.translations.as_str(),
            eq("https://bot.example.org/mini-app/translations.json")
        );
        assert_that!(endpoints.me.as_str(), eq("https://bot.example.org/api/mini-app/me"));
        assert_that!(endpoints.status.as_str(), eq("https://bot.example.org/api/mini-app/status"));
    }

    #[rstest]
    fn http_client_config_from_settings() {
        let settings = MiniAppSettings {
            request_timeout_secs: Some(10),
            user_agent: Some("tma-bootstrap/0.1".to_string()),
            ..MiniAppSettings::default()
        };

        let config = settings.http_client_config();

        assert_that!(config.request_timeout, some(eq(Duration::from_secs(10))));
        assert_that!(config.user_agent, some(eq("tma-bootstrap/0.1")));
    }

    #[rstest]
    fn config_error_validation_errors_format() {
        let settings = MiniAppSettings {
            init_data_env: String::new(),
            request_timeout_secs: Some(0),
            ..MiniAppSettings::default()
        };

        let errors = settings.validate().unwrap_err();
        let config_error = ConfigError::ValidationErrors(errors);

        let error_message = format!("{config_error}");
        assert_that!(error_message, contains_substring("Configuration validation failed"));
        assert_that!(error_message, contains_substring("1. initDataEnv"));
        assert_that!(error_message, contains_substring("2. requestTimeoutSecs"));
    }
}
