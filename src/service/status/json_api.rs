use dioxus_logger::tracing;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::probe::ProbeError,
    model::status::{EndpointCheck, HealthResult},
    service::fetch::{FetchedResponse, HttpFetcher},
};

#[derive(Debug, Deserialize)]
struct StatusSummary {
    status: StatusIndicator,
}

#[derive(Debug, Deserialize)]
struct StatusIndicator {
    /// Any JSON value; only a missing field is malformed.
    description: Value,
}

/// Checks a Statuspage-style JSON API.
///
/// A single GET is issued; a failed attempt is final for this report.
///
/// # Returns
/// - `Up` - 200 and `status.description` equals the endpoint's marker
/// - `Degraded` - 200 and any other description
/// - `Down` - Non-200, unparseable body, missing field or request failure
pub async fn check_json_api(fetcher: &dyn HttpFetcher, endpoint: &EndpointCheck) -> HealthResult {
    match fetcher.fetch(&endpoint.target).await {
        Ok(response) => classify_json_response(endpoint, &response),
        Err(e) => {
            tracing::warn!("Status check for {} failed: {}", endpoint.name, e);
            HealthResult::down(&endpoint.name)
        }
    }
}

/// Classifies a completed response from a JSON status API.
pub fn classify_json_response(endpoint: &EndpointCheck, response: &FetchedResponse) -> HealthResult {
    if response.status != StatusCode::OK {
        tracing::debug!(
            "Status check for {} returned {}",
            endpoint.name,
            response.status
        );
        return HealthResult::down(&endpoint.name);
    }

    match parse_status_description(endpoint, &response.body) {
        Ok(description) if description.as_str() == Some(endpoint.marker()) => {
            HealthResult::up(&endpoint.name)
        }
        Ok(description) => {
            tracing::debug!("{} reports {}", endpoint.name, description);
            HealthResult::degraded(&endpoint.name)
        }
        Err(e) => {
            tracing::warn!("{}", e);
            HealthResult::down(&endpoint.name)
        }
    }
}

fn parse_status_description(endpoint: &EndpointCheck, body: &str) -> Result<Value, ProbeError> {
    let summary: StatusSummary =
        serde_json::from_str(body).map_err(|e| ProbeError::MalformedResponse {
            url: endpoint.target.to_string(),
            reason: e.to_string(),
        })?;

    Ok(summary.status.description)
}
