/// Statuspage summary with the given indicator description.
pub fn with_description(description: &str) -> String {
    serde_json::json!({
        "page": {
            "id": "kctbh9vrtdwd",
            "name": "GitHub",
            "url": "https://www.githubstatus.com",
            "updated_at": "2026-10-16T09:12:44.000Z"
        },
        "status": {
            "indicator": "none",
            "description": description
        }
    })
    .to_string()
}

/// Summary for a fully healthy service.
pub fn operational() -> String {
    with_description("All Systems Operational")
}

/// Summary for a service with a partial outage.
pub fn partial_outage() -> String {
    with_description("Partial Outage")
}

/// Valid JSON that lacks the `status.description` field.
pub fn missing_description() -> String {
    serde_json::json!({ "status": { "indicator": "none" } }).to_string()
}

/// A maintenance page served in place of the API.
pub fn html_error_page() -> String {
    "<html><body><h1>Service Unavailable</h1></body></html>".to_string()
}
