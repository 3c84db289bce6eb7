use dioxus_logger::tracing;
use reqwest::StatusCode;

use crate::{
    model::status::{EndpointCheck, HealthResult},
    service::fetch::HttpFetcher,
};

/// Checks that an endpoint answers with 200. The body is never inspected.
pub async fn check_reachability(fetcher: &dyn HttpFetcher, endpoint: &EndpointCheck) -> HealthResult {
    match fetcher.fetch_status(&endpoint.target).await {
        Ok(StatusCode::OK) => HealthResult::up(&endpoint.name),
        Ok(status) => {
            tracing::debug!("{} answered {}", endpoint.name, status);
            HealthResult::down(&endpoint.name)
        }
        Err(e) => {
            tracing::warn!("Reachability check for {} failed: {}", endpoint.name, e);
            HealthResult::down(&endpoint.name)
        }
    }
}
