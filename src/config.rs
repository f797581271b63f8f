//! Settings for the bootstrap client
/// Config file loader
mod loader;
/// Configuration types and settings
mod types;

pub use types::{
    ConfigError,
    ElementSettings,
    EndpointPaths,
    Endpoints,
    MiniAppSettings,
    SETTINGS_FILE_NAME,
    ValidationError,
};
