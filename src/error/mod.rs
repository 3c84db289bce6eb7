//! Error types for the bot.
//!
//! `AppError` is the top-level error returned by startup code and command
//! handlers. Command handlers never let it escape the event loop: the
//! interaction dispatcher logs it and answers the user with a generic message.
//! Per-endpoint failures during status checks use the narrower `ProbeError`,
//! which is always absorbed into a health classification.

pub mod config;
pub mod internal;
pub mod probe;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError, probe::ProbeError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Endpoint request failed while fetching remote data (mod database, etc.).
    #[error(transparent)]
    ProbeErr(#[from] ProbeError),

    /// HTTP client construction error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Remote JSON document did not match the expected shape.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// A hard-coded endpoint URL failed to parse.
    #[error(transparent)]
    UrlErr(#[from] url::ParseError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// A CSS selector in a scrape path failed to parse.
    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector {
        /// Selector source text
        selector: String,
        /// Parser error message
        reason: String,
    },

    /// Remote host answered with a non-success status.
    #[error("Unexpected status {status} from {url}")]
    UpstreamStatus {
        /// Requested URL
        url: String,
        /// Status code returned
        status: u16,
    },

    /// Command invocation was missing or carried invalid options.
    #[error("{0}")]
    BadRequest(String),

    /// Unexpected internal failure.
    #[error(transparent)]
    InternalError(#[from] InternalError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
