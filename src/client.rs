//! Authenticated JSON client for the mini app backend
/// Response payloads
mod api_result;
/// Client errors
mod error;

use std::time::Duration;

use reqwest::header::{
    AUTHORIZATION,
    CONTENT_TYPE,
};
use url::Url;

pub use api_result::ApiResult;
pub use error::ClientError;

use crate::init_data::InitData;

/// Options for the shared HTTP client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Timeout for the entire request. `None` waits forever.
    pub request_timeout: Option<Duration>,
    /// `User-Agent` header value.
    pub user_agent: Option<String>,
}

/// Creates the HTTP client shared by the translation loader and [`AuthedJsonClient`].
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn create_http_client(config: &HttpClientConfig) -> Result<reqwest::Client, reqwest::Error> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.request_timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent.as_str());
    }
    builder.build()
}

/// POSTs `{}` with `Authorization: tma <init data>` and normalizes the response.
#[derive(Debug, Clone)]
pub struct AuthedJsonClient {
    /// Shared HTTP client
    http: reqwest::Client,
}

impl AuthedJsonClient {
    #[must_use]
    pub const fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Issue an authenticated POST.
    ///
    /// The body is read as text whatever the status. JSON bodies become
    /// [`ApiResult::Json`], anything else [`ApiResult::Raw`].
    ///
    /// # Errors
    ///
    /// - [`ClientError::Request`] for non-2xx responses, with message
    ///   `"<status> <detail>"` where detail is the payload's `detail`, else its
    ///   `error`, else the status reason. Without any of them the message is
    ///   the status code alone.
    /// - [`ClientError::Transport`] when no response could be read.
    pub async fn post(&self, url: &Url, init_data: &InitData) -> Result<ApiResult, ClientError> {
        tracing::debug!("POST {}", url);

        let response = self
            .http
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, init_data.authorization())
            .body("{}")
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        let payload = ApiResult::parse(&text);

        if !status.is_success() {
            let detail = payload
                .error_detail()
                .unwrap_or_else(|| status.canonical_reason().unwrap_or_default().to_string());
            tracing::warn!("POST {} failed: {} {}", url, status.as_u16(), detail);
            return Err(ClientError::Request { status: status.as_u16(), detail, payload });
        }

        Ok(payload)
    }
}
