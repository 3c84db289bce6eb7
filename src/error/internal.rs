use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to convert a Unix timestamp to a Discord timestamp
    ///
    /// Occurs when the report generation time falls outside the range Discord
    /// accepts for embed timestamps.
    #[error("Failed to convert Unix timestamp {timestamp} to Discord timestamp: {reason}")]
    InvalidDiscordTimestamp {
        /// The Unix timestamp that failed to convert
        timestamp: i64,
        /// The reason for conversion failure
        reason: String,
    },

    /// Global logger could not be installed
    #[error("Failed to initialize logger: {0}")]
    LoggerInit(String),
}
