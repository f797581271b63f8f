//! Runs the mini app bootstrap from a terminal.
//!
//! Usage: `tma-bootstrap [PAGE_URL | #tgWebAppData=...]`

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use tma_bootstrap::Bootstrap;
use tma_bootstrap::config::{
    ConfigError,
    MiniAppSettings,
};
use tma_bootstrap::init_data::{
    EnvInitData,
    InitDataResolver,
};
use tma_bootstrap::page::{
    Element,
    OUTPUT_ELEMENT_ID,
    Page,
};
use tracing_subscriber::EnvFilter;
use url::Url;

/// Build the page from configured elements plus the output element.
fn build_page(settings: &MiniAppSettings) -> Page {
    let mut page: Page = settings
        .elements
        .iter()
        .map(|config| {
            let mut element = Element::new(config.text.as_str());
            if let Some(id) = &config.id {
                element = element.with_id(id.as_str());
            }
            if let Some(key) = &config.i18n {
                element = element.with_i18n_key(key.as_str());
            }
            element
        })
        .collect();
    page.push(Element::new("").with_id(OUTPUT_ELEMENT_ID));
    page
}

/// Apply the optional command-line location to the resolver.
fn with_location(
    resolver: InitDataResolver,
    arg: Option<String>,
) -> Result<InitDataResolver, String> {
    let Some(arg) = arg else {
        return Ok(resolver);
    };
    if arg.starts_with('#') {
        return Ok(resolver.with_location_hash(arg));
    }
    Url::parse(&arg)
        .map(|url| resolver.with_page_url(&url))
        .map_err(|e| format!("Invalid page URL '{arg}': {e}"))
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = match std::env::current_dir()
        .map_err(ConfigError::from)
        .and_then(|dir| MiniAppSettings::load_from_dir(&dir))
    {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let resolver = InitDataResolver::new(Arc::new(EnvInitData::new(&settings.init_data_env)));
    let resolver = match with_location(resolver, std::env::args().nth(1)) {
        Ok(resolver) => resolver,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let bootstrap = match Bootstrap::from_settings(&settings, resolver) {
        Ok(bootstrap) => bootstrap,
        Err(e) => {
            tracing::error!("Failed to start: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut page = build_page(&settings);
    let outcome = bootstrap.run_in_page(&mut page).await;

    let mut stdout = std::io::stdout().lock();
    for element in page.elements() {
        if writeln!(stdout, "{}", element.text()).is_err() {
            return ExitCode::FAILURE;
        }
    }

    if outcome.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
