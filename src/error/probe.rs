//! Failures that can occur while probing a single endpoint.
//!
//! None of these ever escape a status check: the check boundary converts each
//! of them into a health classification (or an omitted result for scraped
//! pages) and logs the cause.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    /// Connection refused, DNS failure, TLS failure or any other transport error.
    #[error(transparent)]
    Network(#[from] reqwest::Error),

    /// The request did not complete within the client's timeout.
    #[error("Request to {url} timed out")]
    Timeout {
        /// URL that was being requested
        url: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("Malformed response from {url}: {reason}")]
    MalformedResponse {
        /// URL that returned the body
        url: String,
        /// Decoder error message
        reason: String,
    },

    /// A level of the selector path matched nothing in the rendered page.
    #[error("No element matches selector '{selector}' (level {level})")]
    MarkupShapeMismatch {
        /// Zero-based depth in the selector path
        level: usize,
        /// Selector source text that found no element
        selector: String,
    },

    /// The headless browser could not be launched or failed while rendering.
    #[error("Browser automation failed: {0}")]
    Browser(String),

    /// The blocking task driving the browser panicked or was cancelled.
    #[error(transparent)]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl ProbeError {
    /// Converts a reqwest error, keeping timeouts distinguishable in logs.
    pub fn from_request(url: &url::Url, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
            }
        } else {
            Self::Network(err)
        }
    }
}
