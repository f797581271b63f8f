//! Init data resolution

use std::fmt;
use std::sync::Arc;

use url::Url;

use super::{
    InitData,
    InitDataProvider,
};

/// Fragment prefix Telegram uses when it passes init data through the URL
/// (iOS and desktop clients).
pub const INIT_DATA_FRAGMENT_PREFIX: &str = "#tgWebAppData=";

/// Resolves init data from the host provider, falling back to the page fragment.
#[derive(Clone)]
pub struct InitDataResolver {
    /// Host runtime provider
    provider: Arc<dyn InitDataProvider>,
    /// `location.hash` of the page, including the leading `#`
    location_hash: Option<String>,
}

impl fmt::Debug for InitDataResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InitDataResolver")
            .field("provider", &"<dyn InitDataProvider>")
            .field("has_location_hash", &self.location_hash.is_some())
            .finish()
    }
}

impl InitDataResolver {
    #[must_use]
    pub fn new(provider: Arc<dyn InitDataProvider>) -> Self {
        Self { provider, location_hash: None }
    }

    /// Set the location hash (`#tgWebAppData=...`).
    #[must_use]
    pub fn with_location_hash(mut self, hash: impl Into<String>) -> Self {
        self.location_hash = Some(hash.into());
        self
    }

    /// Take the location hash from a full page URL.
    #[must_use]
    pub fn with_page_url(mut self, page_url: &Url) -> Self {
        self.location_hash = page_url.fragment().map(|fragment| format!("#{fragment}"));
        self
    }

    /// Resolve init data. First match wins:
    ///
    /// 1. non-empty value from the host provider
    /// 2. `#tgWebAppData=<urlencoded>` fragment, decoded
    /// 3. empty
    #[must_use]
    pub fn resolve(&self) -> InitData {
        if let Some(raw) = self.provider.init_data()
            && !raw.is_empty()
        {
            tracing::debug!("Using init data from host provider");
            return InitData::new(raw);
        }

        if let Some(raw) = self.location_hash.as_deref().and_then(init_data_from_fragment) {
            tracing::debug!("Using init data from URL fragment");
            return InitData::new(raw);
        }

        tracing::debug!("No init data available");
        InitData::default()
    }
}

/// Extract init data from a location hash.
///
/// Everything after the prefix is percent-decoded like `decodeURIComponent`
/// (`+` stays `+`). Returns `None` when the prefix is missing, the value is
/// empty, has a `%` without two hex digits, or is not valid percent-encoded
/// UTF-8.
#[must_use]
pub fn init_data_from_fragment(hash: &str) -> Option<String> {
    let encoded = hash.strip_prefix(INIT_DATA_FRAGMENT_PREFIX)?;

    if !has_valid_escapes(encoded) {
        tracing::warn!("Ignoring malformed tgWebAppData fragment: bad percent escape");
        return None;
    }

    match urlencoding::decode(encoded) {
        Ok(decoded) if decoded.is_empty() => None,
        Ok(decoded) => Some(decoded.into_owned()),
        Err(e) => {
            tracing::warn!("Ignoring malformed tgWebAppData fragment: {}", e);
            None
        }
    }
}

/// Every `%` must be followed by two hex digits.
///
/// `urlencoding::decode` passes such sequences through untouched.
fn has_valid_escapes(encoded: &str) -> bool {
    let mut bytes = encoded.bytes();
    while let Some(byte) = bytes.next() {
        if byte == b'%' {
            let hex_pair = bytes.next().is_some_and(|b| b.is_ascii_hexdigit())
                && bytes.next().is_some_and(|b| b.is_ascii_hexdigit());
            if !hex_pair {
                return false;
            }
        }
    }
    true
}
