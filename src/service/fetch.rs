//! HTTP capability used by status checks and the mod search.

use reqwest::StatusCode;
use serenity::async_trait;
use url::Url;

use crate::error::probe::ProbeError;

/// Status code and body of a completed GET request.
#[derive(Debug, Clone)]
pub struct FetchedResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Issues GET requests with a bounded timeout and no retries.
///
/// Implemented for `reqwest::Client`; the timeout is whatever the client was
/// built with (see `startup::setup_reqwest_client`).
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    /// Fetches `url` and reads the full body as text.
    async fn fetch(&self, url: &Url) -> Result<FetchedResponse, ProbeError>;

    /// Fetches `url` and returns only the status code; the body is not read.
    async fn fetch_status(&self, url: &Url) -> Result<StatusCode, ProbeError>;
}

#[async_trait]
impl HttpFetcher for reqwest::Client {
    async fn fetch(&self, url: &Url) -> Result<FetchedResponse, ProbeError> {
        let response = reqwest::Client::get(self, url.clone())
            .send()
            .await
            .map_err(|e| ProbeError::from_request(url, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProbeError::from_request(url, e))?;

        Ok(FetchedResponse { status, body })
    }

    async fn fetch_status(&self, url: &Url) -> Result<StatusCode, ProbeError> {
        let response = reqwest::Client::get(self, url.clone())
            .send()
            .await
            .map_err(|e| ProbeError::from_request(url, e))?;

        Ok(response.status())
    }
}
