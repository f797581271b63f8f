//! Host-side init data providers

/// Supplies init data from the host runtime (`Telegram.WebApp.initData`).
pub trait InitDataProvider: Send + Sync {
    /// Raw init data, or `None` when the host has none.
    fn init_data(&self) -> Option<String>;
}

/// A fixed value, for embedding and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticInitData(Option<String>);

impl StaticInitData {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(Some(value.into()))
    }

    #[must_use]
    pub const fn none() -> Self {
        Self(None)
    }
}

impl InitDataProvider for StaticInitData {
    fn init_data(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Reads init data from an environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvInitData {
    /// Variable name
    var: String,
}

impl EnvInitData {
    #[must_use]
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl InitDataProvider for EnvInitData {
    fn init_data(&self) -> Option<String> {
        std::env::var(&self.var).ok()
    }
}
