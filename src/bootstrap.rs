//! Mini app bootstrap: translate the page, resolve init data, call the backend

use serde::Serialize;

use crate::client::{
    ApiResult,
    AuthedJsonClient,
    ClientError,
    create_http_client,
};
use crate::config::{
    Endpoints,
    MiniAppSettings,
};
use crate::i18n::{
    apply_i18n,
    load_translations,
};
use crate::init_data::InitDataResolver;
use crate::page::{
    OUTPUT_ELEMENT_ID,
    Page,
    RenderTarget,
};

/// Rendered when no init data can be resolved.
pub const MISSING_INIT_DATA_MESSAGE: &str = "Missing Telegram init data (open inside Telegram).";

/// Terminal state of a bootstrap run
#[derive(Debug)]
pub enum Outcome {
    /// No init data; no backend call was made
    MissingAuth,
    /// Both calls succeeded
    Rendered { me: ApiResult, status: ApiResult },
    /// One of the calls failed
    Failed(ClientError),
}

/// `{ me, status }` as rendered to the output
#[derive(Serialize)]
struct Combined<'a> {
    /// `me` payload
    me: &'a ApiResult,
    /// `status` payload
    status: &'a ApiResult,
}

impl Outcome {
    /// Text written to the output element.
    ///
    /// Success renders `{ "me": ..., "status": ... }` pretty-printed with two
    /// spaces; failures render only the error message.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::MissingAuth => MISSING_INIT_DATA_MESSAGE.to_string(),
            Self::Rendered { me, status } => {
                serde_json::to_string_pretty(&Combined { me, status })
                    .unwrap_or_else(|e| e.to_string())
            }
            Self::Failed(error) => error.to_string(),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Rendered { .. })
    }
}

/// Runs the mini app startup sequence.
#[derive(Debug, Clone)]
pub struct Bootstrap {
    /// Shared HTTP client (translations)
    http: reqwest::Client,
    /// Authenticated client (`me`, `status`)
    client: AuthedJsonClient,
    /// Backend endpoints
    endpoints: Endpoints,
    /// Init data source
    resolver: InitDataResolver,
}

impl Bootstrap {
    #[must_use]
    pub fn new(http: reqwest::Client, endpoints: Endpoints, resolver: InitDataResolver) -> Self {
        let client = AuthedJsonClient::new(http.clone());
        Self { http, client, endpoints, resolver }
    }

    /// Build from validated settings.
    ///
    /// # Errors
    /// - Endpoint URLs cannot be built
    /// - HTTP client cannot be built
    pub fn from_settings(
        settings: &MiniAppSettings,
        resolver: InitDataResolver,
    ) -> Result<Self, ClientError> {
        let endpoints = settings.endpoint_urls()?;
        let http = create_http_client(&settings.http_client_config())?;
        Ok(Self::new(http, endpoints, resolver))
    }

    /// Load translations and apply them to the page.
    ///
    /// Never fails; a missing dictionary leaves the page as it is.
    pub async fn localize(&self, page: &mut Page) {
        let translations = load_translations(&self.http, &self.endpoints.translations).await;
        apply_i18n(&translations, page.localizable_mut());
    }

    /// Resolve init data and call `me`, then `status`.
    ///
    /// The calls run one after the other with the same token. The first
    /// failure stops the run and nothing from the other call is kept.
    pub async fn fetch(&self) -> Outcome {
        let init_data = self.resolver.resolve();
        if init_data.is_empty() {
            tracing::info!("No init data; skipping backend calls");
            return Outcome::MissingAuth;
        }

        if let Some(user) = init_data.user() {
            tracing::debug!(user_id = user.id, "Init data resolved");
        }

        let me = match self.client.post(&self.endpoints.me, &init_data).await {
            Ok(me) => me,
            Err(e) => return Outcome::Failed(e),
        };
        let status = match self.client.post(&self.endpoints.status, &init_data).await {
            Ok(status) => status,
            Err(e) => return Outcome::Failed(e),
        };

        Outcome::Rendered { me, status }
    }

    /// Full run with an explicit output target.
    pub async fn run<O>(&self, page: &mut Page, out: &mut O) -> Outcome
    where
        O: RenderTarget + ?Sized,
    {
        self.localize(page).await;
        let outcome = self.fetch().await;
        out.set_text(&outcome.text());
        outcome
    }

    /// Full run writing into the page's `out` element.
    ///
    /// Without an `out` element the outcome is still returned, only not rendered.
    pub async fn run_in_page(&self, page: &mut Page) -> Outcome {
        self.localize(page).await;
        let outcome = self.fetch().await;

        match page.element_by_id_mut(OUTPUT_ELEMENT_ID) {
            Some(out) => out.set_text(&outcome.text()),
            None => tracing::warn!("Page has no '#{}' element", OUTPUT_ELEMENT_ID),
        }

        outcome
    }
}
