//! Shared state handed to every command handler.
//!
//! The state is initialized once during startup and cloned into the event
//! handler. Every field is immutable and cheap to clone.

use std::sync::Arc;

use crate::{
    config::Config,
    error::AppError,
    model::status::EndpointCatalog,
    service::{browser::BrowserLauncher, fetch::HttpFetcher},
};

#[derive(Clone)]
pub struct AppState {
    /// Validated configuration loaded at startup.
    pub config: Arc<Config>,

    /// HTTP client for status probes and mod database requests.
    pub fetcher: Arc<dyn HttpFetcher>,

    /// Launcher for headless browser sessions used by scrape checks.
    pub browser: Arc<dyn BrowserLauncher>,

    /// Endpoints probed by the status commands.
    pub catalog: Arc<EndpointCatalog>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `config` - Application configuration
    /// - `http_client` - HTTP client for external requests
    /// - `browser` - Headless browser launcher
    ///
    /// # Returns
    /// - `Ok(AppState)` - Initialized application state
    /// - `Err(AppError)` - A built-in endpoint URL or selector failed to parse
    pub fn new(
        config: Config,
        http_client: reqwest::Client,
        browser: Arc<dyn BrowserLauncher>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            config: Arc::new(config),
            fetcher: Arc::new(http_client),
            browser,
            catalog: Arc::new(EndpointCatalog::arisen()?),
        })
    }
}
