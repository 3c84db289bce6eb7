//! Headless browser capability for pages that render their status client-side.
//!
//! A `BrowserSession` owns one browser process. The process is terminated when
//! the session is dropped, so holding the session in a local binding ties the
//! process lifetime to the scope of a single check, on every exit path.

use dioxus_logger::tracing;
use headless_chrome::{Browser, LaunchOptions};
use std::{path::PathBuf, time::Duration};
use url::Url;

use crate::error::probe::ProbeError;

/// Idle time after which Chrome is considered hung and the connection dropped.
const BROWSER_IDLE_TIMEOUT: Duration = Duration::from_secs(60);

/// Starts browser sessions.
pub trait BrowserLauncher: Send + Sync {
    fn launch(&self) -> Result<Box<dyn BrowserSession>, ProbeError>;
}

/// A running browser. Dropping it tears the browser down.
pub trait BrowserSession {
    /// Navigates to `url`, waits `settle` for scripts to run and returns the DOM
    /// serialized as HTML.
    fn rendered_html(&mut self, url: &Url, settle: Duration) -> Result<String, ProbeError>;
}

/// Launches headless Chrome/Chromium over the DevTools protocol.
pub struct ChromeLauncher {
    chrome_path: Option<PathBuf>,
}

impl ChromeLauncher {
    /// # Arguments
    /// - `chrome_path` - Explicit browser binary; when `None` the usual install
    ///   locations are searched
    pub fn new(chrome_path: Option<PathBuf>) -> Self {
        Self { chrome_path }
    }
}

impl BrowserLauncher for ChromeLauncher {
    fn launch(&self) -> Result<Box<dyn BrowserSession>, ProbeError> {
        let options = LaunchOptions {
            headless: true,
            path: self.chrome_path.clone(),
            idle_browser_timeout: BROWSER_IDLE_TIMEOUT,
            ..LaunchOptions::default()
        };

        let browser = Browser::new(options).map_err(|e| ProbeError::Browser(e.to_string()))?;

        tracing::debug!("Launched headless browser");

        Ok(Box::new(ChromeSession { browser }))
    }
}

/// Session backed by a `headless_chrome::Browser`, whose `Drop` kills the
/// Chrome process.
struct ChromeSession {
    browser: Browser,
}

impl BrowserSession for ChromeSession {
    fn rendered_html(&mut self, url: &Url, settle: Duration) -> Result<String, ProbeError> {
        let tab = self
            .browser
            .new_tab()
            .map_err(|e| ProbeError::Browser(e.to_string()))?;

        tab.navigate_to(url.as_str())
            .map_err(|e| ProbeError::Browser(e.to_string()))?
            .wait_until_navigated()
            .map_err(|e| ProbeError::Browser(e.to_string()))?;

        // No completion signal exists for the page scripts; wait a fixed time.
        std::thread::sleep(settle);

        tab.get_content()
            .map_err(|e| ProbeError::Browser(e.to_string()))
    }
}
