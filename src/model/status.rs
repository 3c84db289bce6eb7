//! Health-check domain models.
//!
//! An `EndpointCheck` describes one remote service and how to probe it. Probing
//! produces a `HealthResult`, and a fixed list of checks produces a `Report`.
//! Reports are plain data; turning them into Discord embeds is the job of
//! `bot::embed`.

use chrono::{DateTime, Utc};
use scraper::Selector;
use std::time::Duration;
use url::Url;

use crate::error::AppError;

/// Status-page description that means every component is healthy.
pub const OPERATIONAL_MARKER: &str = "All Systems Operational";

/// Substring of scraped status text that means the service is up.
pub const SCRAPE_UP_MARKER: &str = "up";

/// Three-value health classification of a single endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthState {
    Up,
    Degraded,
    Down,
}

impl HealthState {
    /// Status glyph shown in front of each report line.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Up => "🟢",
            Self::Degraded => "🟡",
            Self::Down => "🔴",
        }
    }
}

/// Nested CSS selector path into a rendered page.
///
/// Each level is applied to the first element matched by the previous level,
/// so `["div#root", "div.ms-Stack", "span"]` finds the first `span` inside the
/// first `div.ms-Stack` inside `div#root`. Selectors are parsed once when the
/// path is built.
#[derive(Debug, Clone)]
pub struct ScrapePath {
    levels: Vec<(String, Selector)>,
}

impl ScrapePath {
    /// Parses every level of the path.
    ///
    /// # Returns
    /// - `Ok(ScrapePath)` - All selectors parsed
    /// - `Err(AppError::InvalidSelector)` - First selector that failed to parse
    pub fn parse(levels: &[&str]) -> Result<Self, AppError> {
        let levels = levels
            .iter()
            .map(|source| {
                Selector::parse(source)
                    .map(|selector| (source.to_string(), selector))
                    .map_err(|e| AppError::InvalidSelector {
                        selector: source.to_string(),
                        reason: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { levels })
    }

    /// Iterates `(source, selector)` pairs from the outermost level inward.
    pub fn levels(&self) -> impl Iterator<Item = (&str, &Selector)> {
        self.levels
            .iter()
            .map(|(source, selector)| (source.as_str(), selector))
    }
}

/// How to find the status marker on a page that is rendered client-side.
#[derive(Debug, Clone)]
pub struct ScrapeSpec {
    pub path: ScrapePath,
    /// Fixed wait after navigation for scripts to populate the page.
    pub settle: Duration,
}

#[derive(Debug, Clone)]
pub enum ProbeKind {
    /// Statuspage-style JSON API (`{"status": {"description": ...}}`).
    JsonApi,
    /// Any 200 response counts as up; the body is never read.
    PlainReachability,
    /// Page rendered in a headless browser and scraped for a marker.
    HtmlScrape(ScrapeSpec),
}

/// A remote service whose health is checked. Defined once at startup.
#[derive(Debug, Clone)]
pub struct EndpointCheck {
    pub name: String,
    pub probe_kind: ProbeKind,
    pub target: Url,
    pub expected_marker: Option<String>,
}

impl EndpointCheck {
    pub fn json_api(name: &str, target: &str) -> Result<Self, AppError> {
        Ok(Self {
            name: name.to_string(),
            probe_kind: ProbeKind::JsonApi,
            target: Url::parse(target)?,
            expected_marker: None,
        })
    }

    pub fn reachability(name: &str, target: &str) -> Result<Self, AppError> {
        Ok(Self {
            name: name.to_string(),
            probe_kind: ProbeKind::PlainReachability,
            target: Url::parse(target)?,
            expected_marker: None,
        })
    }

    pub fn html_scrape(
        name: &str,
        target: &str,
        path: &[&str],
        settle: Duration,
    ) -> Result<Self, AppError> {
        Ok(Self {
            name: name.to_string(),
            probe_kind: ProbeKind::HtmlScrape(ScrapeSpec {
                path: ScrapePath::parse(path)?,
                settle,
            }),
            target: Url::parse(target)?,
            expected_marker: None,
        })
    }

    /// Overrides the default marker for this endpoint's probe kind.
    #[cfg(test)]
    pub fn with_marker(mut self, marker: &str) -> Self {
        self.expected_marker = Some(marker.to_string());
        self
    }

    /// Marker this endpoint is compared against.
    pub fn marker(&self) -> &str {
        match (&self.expected_marker, &self.probe_kind) {
            (Some(marker), _) => marker,
            (None, ProbeKind::HtmlScrape(_)) => SCRAPE_UP_MARKER,
            (None, _) => OPERATIONAL_MARKER,
        }
    }
}

/// Outcome of probing one endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthResult {
    pub name: String,
    pub state: HealthState,
    pub detail: String,
}

impl HealthResult {
    pub fn new(name: &str, state: HealthState, detail: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            state,
            detail: detail.into(),
        }
    }

    pub fn up(name: &str) -> Self {
        Self::new(name, HealthState::Up, "Fully Operational")
    }

    pub fn degraded(name: &str) -> Self {
        Self::new(name, HealthState::Degraded, "Partly Operational")
    }

    pub fn down(name: &str) -> Self {
        Self::new(name, HealthState::Down, "Down")
    }
}

/// One rendered line of a report: label, status glyph and detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine<'a> {
    pub label: &'a str,
    pub glyph: &'static str,
    pub detail: &'a str,
}

/// Ordered health results for one invocation of a status command.
#[derive(Debug, Clone)]
pub struct Report {
    pub title: String,
    pub results: Vec<HealthResult>,
    pub generated_at: DateTime<Utc>,
}

impl Report {
    pub fn lines(&self) -> impl Iterator<Item = ReportLine<'_>> {
        self.results.iter().map(|result| ReportLine {
            label: &result.name,
            glyph: result.state.glyph(),
            detail: &result.detail,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Assembles a `Report` one endpoint at a time, in endpoint order.
pub struct ReportBuilder {
    title: String,
    results: Vec<HealthResult>,
}

impl ReportBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            results: Vec::new(),
        }
    }

    /// Appends the outcome of one check. `None` (an omitted scrape) adds nothing.
    pub fn push(mut self, result: Option<HealthResult>) -> Self {
        if let Some(result) = result {
            self.results.push(result);
        }
        self
    }

    pub fn build(self) -> Report {
        Report {
            title: self.title,
            results: self.results,
            generated_at: Utc::now(),
        }
    }
}

/// The endpoint lists behind each status command.
#[derive(Debug, Clone)]
pub struct EndpointCatalog {
    /// Services aggregated by `/status`, in display order.
    pub services: Vec<EndpointCheck>,
    pub playstation: EndpointCheck,
    pub xbox: EndpointCheck,
}

impl EndpointCatalog {
    /// The production endpoints checked by the bot.
    pub fn arisen() -> Result<Self, AppError> {
        Ok(Self {
            services: vec![
                EndpointCheck::json_api("GitHub", "https://www.githubstatus.com/api/v2/status.json")?,
                EndpointCheck::json_api(
                    "Database",
                    "https://status.dropbox.com/api/v2/status.json",
                )?,
                EndpointCheck::reachability("Website", "https://arisen.studio/")?,
                EndpointCheck::reachability("Web Store", "https://arisenstudio.app/")?,
            ],
            playstation: EndpointCheck::html_scrape(
                "Playstation",
                "https://status.playstation.com/#statusArea",
                &["div#statusArea", "span.offscreen"],
                Duration::from_secs(3),
            )?,
            xbox: EndpointCheck::html_scrape(
                "Xbox",
                "https://support.xbox.com/en-GB/xbox-live-status",
                &["div#root", "div.ms-Stack.css-141", "span"],
                Duration::from_secs(15),
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_production_catalog() {
        let catalog = EndpointCatalog::arisen().unwrap();

        let names: Vec<_> = catalog.services.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["GitHub", "Database", "Website", "Web Store"]);
        assert_eq!(catalog.services[0].marker(), OPERATIONAL_MARKER);
        assert_eq!(catalog.playstation.marker(), SCRAPE_UP_MARKER);
        assert_eq!(catalog.xbox.marker(), SCRAPE_UP_MARKER);
    }

    #[test]
    fn rejects_invalid_selector() {
        let result = ScrapePath::parse(&["div#root", "div[["]);

        assert!(matches!(
            result,
            Err(AppError::InvalidSelector { ref selector, .. }) if selector == "div[["
        ));
    }

    #[test]
    fn builder_skips_omitted_results_and_keeps_order() {
        let report = ReportBuilder::new("Current Status")
            .push(Some(HealthResult::up("GitHub")))
            .push(None)
            .push(Some(HealthResult::down("Website")))
            .build();

        let lines: Vec<_> = report.lines().collect();
        assert_eq!(
            lines,
            [
                ReportLine {
                    label: "GitHub",
                    glyph: "🟢",
                    detail: "Fully Operational"
                },
                ReportLine {
                    label: "Website",
                    glyph: "🔴",
                    detail: "Down"
                },
            ]
        );
    }

    #[test]
    fn explicit_marker_overrides_default() {
        let endpoint = EndpointCheck::json_api("gh", "https://www.githubstatus.com/api/v2/status.json")
            .unwrap()
            .with_marker("Operational");

        assert_eq!(endpoint.marker(), "Operational");
    }
}
