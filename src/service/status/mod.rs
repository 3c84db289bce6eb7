//! Status report builder.
//!
//! Probes a fixed list of endpoints and assembles one `Report`. Every probe
//! absorbs its own failures: JSON and reachability checks degrade to `Down`,
//! scrape checks are omitted. Building a report therefore never fails as a
//! whole.
//!
//! - `json_api` - Statuspage-style JSON APIs
//! - `reachability` - Plain HTTP 200 checks
//! - `scrape` - Client-rendered pages scraped through a headless browser

pub mod json_api;
pub mod reachability;
pub mod scrape;

#[cfg(test)]
mod test;

use futures::future::join_all;
use std::sync::Arc;

use crate::{
    model::status::{EndpointCheck, HealthResult, ProbeKind, Report, ReportBuilder},
    service::{browser::BrowserLauncher, fetch::HttpFetcher},
};

pub struct StatusReportService<'a> {
    fetcher: &'a dyn HttpFetcher,
    browser: Arc<dyn BrowserLauncher>,
}

impl<'a> StatusReportService<'a> {
    /// Creates a new StatusReportService instance.
    ///
    /// # Arguments
    /// - `fetcher` - HTTP capability for JSON and reachability checks
    /// - `browser` - Browser launcher for scrape checks; shared with the blocking
    ///   pool, hence the `Arc`
    pub fn new(fetcher: &'a dyn HttpFetcher, browser: Arc<dyn BrowserLauncher>) -> Self {
        Self { fetcher, browser }
    }

    /// Probes every endpoint and assembles the results in endpoint order.
    ///
    /// All checks are started together and awaited as a group; results are
    /// placed by position, so completion order has no effect on the report.
    ///
    /// # Arguments
    /// - `title` - Report title
    /// - `endpoints` - Endpoints to probe, in display order
    ///
    /// # Returns
    /// - `Report` - One entry per endpoint, minus scrape checks that produced
    ///   nothing
    pub async fn build_report(&self, title: &str, endpoints: &[EndpointCheck]) -> Report {
        let results = join_all(endpoints.iter().map(|endpoint| self.check(endpoint))).await;

        results
            .into_iter()
            .fold(ReportBuilder::new(title), ReportBuilder::push)
            .build()
    }

    /// Runs the probe matching the endpoint's kind.
    pub async fn check(&self, endpoint: &EndpointCheck) -> Option<HealthResult> {
        match &endpoint.probe_kind {
            ProbeKind::JsonApi => Some(json_api::check_json_api(self.fetcher, endpoint).await),
            ProbeKind::PlainReachability => {
                Some(reachability::check_reachability(self.fetcher, endpoint).await)
            }
            ProbeKind::HtmlScrape(spec) => {
                scrape::check_html_scrape(self.browser.clone(), endpoint, spec).await
            }
        }
    }
}
