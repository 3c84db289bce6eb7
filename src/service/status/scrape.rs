//! Status checks against pages that only render their status in the browser.
//!
//! Unlike the HTTP checks, a scrape that cannot reach or read the page yields
//! no result at all rather than `Down`. Commands built on a single scraped
//! endpoint must handle an empty report.

use dioxus_logger::tracing;
use scraper::{ElementRef, Html};
use std::{sync::Arc, time::Duration};
use url::Url;

use crate::{
    error::probe::ProbeError,
    model::status::{EndpointCheck, HealthResult, HealthState, ScrapePath, ScrapeSpec},
    service::browser::BrowserLauncher,
};

/// Renders the endpoint in a fresh browser session and classifies the marker.
///
/// The browser work is blocking and runs on tokio's blocking pool. The session
/// is dropped before the blocking task returns, whether rendering succeeded,
/// failed or panicked.
///
/// # Returns
/// - `Some(Up)` - Marker text contains the endpoint's marker
/// - `Some(Down)` - Marker text found but does not contain the marker
/// - `None` - Browser failure or the selector path matched nothing
pub async fn check_html_scrape(
    launcher: Arc<dyn BrowserLauncher>,
    endpoint: &EndpointCheck,
    spec: &ScrapeSpec,
) -> Option<HealthResult> {
    let url = endpoint.target.clone();
    let settle = spec.settle;

    let rendered = tokio::task::spawn_blocking(move || render_page(launcher.as_ref(), &url, settle))
        .await
        .map_err(ProbeError::from)
        .and_then(|result| result);

    let html = match rendered {
        Ok(html) => html,
        Err(e) => {
            tracing::error!("Failed to render {} status page: {}", endpoint.name, e);
            return None;
        }
    };

    match extract_marker_text(&html, &spec.path) {
        Ok(text) => Some(classify_marker_text(endpoint, &text)),
        Err(e) => {
            tracing::warn!("{} status page changed shape: {}", endpoint.name, e);
            None
        }
    }
}

/// Opens a session, renders `url` and lets the session drop.
pub fn render_page(
    launcher: &dyn BrowserLauncher,
    url: &Url,
    settle: Duration,
) -> Result<String, ProbeError> {
    let mut session = launcher.launch()?;
    session.rendered_html(url, settle)
}

/// Walks the selector path through `html`, taking the first match per level.
///
/// # Returns
/// - `Ok(String)` - Concatenated text of the innermost element, trimmed
/// - `Err(ProbeError::MarkupShapeMismatch)` - First level with no match
pub fn extract_marker_text(html: &str, path: &ScrapePath) -> Result<String, ProbeError> {
    let document = Html::parse_document(html);
    let mut current: Option<ElementRef> = None;

    for (level, (source, selector)) in path.levels().enumerate() {
        let found = match current {
            Some(parent) => parent.select(selector).next(),
            None => document.select(selector).next(),
        };

        current = Some(found.ok_or_else(|| ProbeError::MarkupShapeMismatch {
            level,
            selector: source.to_string(),
        })?);
    }

    let element = current.ok_or_else(|| ProbeError::MarkupShapeMismatch {
        level: 0,
        selector: String::new(),
    })?;

    Ok(element.text().collect::<String>().trim().to_string())
}

/// `Up` when the marker text contains the endpoint's marker, otherwise `Down`.
pub fn classify_marker_text(endpoint: &EndpointCheck, text: &str) -> HealthResult {
    let state = if text.contains(endpoint.marker()) {
        HealthState::Up
    } else {
        HealthState::Down
    };

    HealthResult::new(&endpoint.name, state, text)
}
