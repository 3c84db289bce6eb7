use super::*;
use crate::service::status::json_api::check_json_api;
use test_utils::fixture::status_page;

/// Tests a healthy status API.
///
/// Verifies that a 200 response whose description matches the operational
/// marker is classified as up.
///
/// Expected: HealthResult{name: "gh", state: Up}
#[tokio::test]
async fn operational_description_is_up() {
    let fetcher = FakeFetcher::new().respond(
        GH_URL,
        200,
        r#"{"status":{"description":"All Systems Operational"}}"#,
    );

    let result = check_json_api(&fetcher, &gh_endpoint()).await;

    assert_eq!(result, HealthResult::up("gh"));
    assert_eq!(result.state, HealthState::Up);
}

/// Tests a status API answering with a server error.
///
/// Expected: HealthResult{name: "gh", state: Down}
#[tokio::test]
async fn non_200_is_down() {
    let fetcher = FakeFetcher::new().respond(GH_URL, 503, status_page::operational());

    let result = check_json_api(&fetcher, &gh_endpoint()).await;

    assert_eq!(result, HealthResult::down("gh"));
}

/// Tests a status API reporting an incident.
///
/// Expected: HealthResult{name: "gh", state: Degraded}
#[tokio::test]
async fn other_description_is_degraded() {
    let fetcher = FakeFetcher::new().respond(
        GH_URL,
        200,
        r#"{"status":{"description":"Partial Outage"}}"#,
    );

    let result = check_json_api(&fetcher, &gh_endpoint()).await;

    assert_eq!(result, HealthResult::degraded("gh"));
    assert_eq!(result.detail, "Partly Operational");
}

/// Tests a 200 response carrying an HTML error page instead of JSON.
///
/// Expected: Down
#[tokio::test]
async fn unparseable_body_is_down() {
    let fetcher = FakeFetcher::new().respond(GH_URL, 200, status_page::html_error_page());

    let result = check_json_api(&fetcher, &gh_endpoint()).await;

    assert_eq!(result.state, HealthState::Down);
}

/// Tests valid JSON that is missing the description field.
///
/// Expected: Down
#[tokio::test]
async fn missing_description_is_down() {
    let fetcher = FakeFetcher::new().respond(GH_URL, 200, status_page::missing_description());

    let result = check_json_api(&fetcher, &gh_endpoint()).await;

    assert_eq!(result.state, HealthState::Down);
}

/// Tests a request that times out.
///
/// Expected: Down
#[tokio::test]
async fn timeout_is_down() {
    let fetcher = FakeFetcher::new().time_out(GH_URL);

    let result = check_json_api(&fetcher, &gh_endpoint()).await;

    assert_eq!(result, HealthResult::down("gh"));
}

/// Tests that the marker comparison is exact.
///
/// Verifies that a description differing only in case does not count as
/// operational.
///
/// Expected: Degraded
#[tokio::test]
async fn marker_comparison_is_exact() {
    let fetcher = FakeFetcher::new().respond(
        GH_URL,
        200,
        status_page::with_description("all systems operational"),
    );

    let result = check_json_api(&fetcher, &gh_endpoint()).await;

    assert_eq!(result.state, HealthState::Degraded);
}

/// Tests a parseable body whose description is null.
///
/// Expected: HealthResult{name: "gh", state: Degraded}
#[tokio::test]
async fn null_description_is_degraded() {
    let fetcher =
        FakeFetcher::new().respond(GH_URL, 200, r#"{"status":{"description":null}}"#);

    let result = check_json_api(&fetcher, &gh_endpoint()).await;

    assert_eq!(result, HealthResult::degraded("gh"));
}

/// Tests a parseable body whose description is not a string.
///
/// Expected: HealthResult{name: "gh", state: Degraded}
#[tokio::test]
async fn numeric_description_is_degraded() {
    let fetcher = FakeFetcher::new().respond(GH_URL, 200, r#"{"status":{"description":42}}"#);

    let result = check_json_api(&fetcher, &gh_endpoint()).await;

    assert_eq!(result, HealthResult::degraded("gh"));
}
