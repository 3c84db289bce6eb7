use std::{sync::Arc, time::Duration};

use crate::{
    config::Config,
    error::AppError,
    service::browser::{BrowserLauncher, ChromeLauncher},
};

/// Builds the HTTP client shared by every command.
///
/// The timeout bounds each status probe and mod database request; there are no
/// retries, so a request that exceeds it is final for that invocation.
///
/// # Arguments
/// - `timeout` - Total time allowed per request, including reading the body
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend failed to initialize
pub fn setup_reqwest_client(timeout: Duration) -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()?;

    Ok(client)
}

/// Creates the launcher used for status pages that need a real browser.
///
/// Nothing is started here; each scrape check launches and tears down its own
/// browser.
pub fn setup_browser_launcher(config: &Config) -> Arc<dyn BrowserLauncher> {
    Arc::new(ChromeLauncher::new(config.chrome_path.clone()))
}
