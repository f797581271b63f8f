//! Telegram init data
/// Host-side init data sources
mod provider;
/// Init data resolution (host first, then URL fragment)
mod resolver;

use std::fmt;

use serde::Deserialize;

pub use provider::{
    EnvInitData,
    InitDataProvider,
    StaticInitData,
};
pub use resolver::{
    INIT_DATA_FRAGMENT_PREFIX,
    InitDataResolver,
    init_data_from_fragment,
};

/// Authorization scheme expected by the backend.
pub const AUTHORIZATION_SCHEME: &str = "tma";

/// Opaque init data token issued by the Telegram client.
///
/// Sent verbatim as `Authorization: tma <token>`. An empty token means
/// no init data is available. `Debug` never prints the token itself.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct InitData(String);

/// The `user` field of init data.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TelegramUser {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl InitData {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value of the `Authorization` header.
    #[must_use]
    pub fn authorization(&self) -> String {
        format!("{AUTHORIZATION_SCHEME} {}", self.0)
    }

    /// Decoded value of one `key=value` pair of the token.
    ///
    /// Nothing here is verified; the signature check belongs to the backend.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<String> {
        url::form_urlencoded::parse(self.0.as_bytes())
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    /// The `user` field, if present and well formed.
    #[must_use]
    pub fn user(&self) -> Option<TelegramUser> {
        let raw = self.field("user")?;
        serde_json::from_str(&raw).ok()
    }
}

impl fmt::Debug for InitData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InitData").field("len", &self.0.len()).finish_non_exhaustive()
    }
}
