use thiserror::Error;

/// Result type alias for UptimeRobot operations
pub type Result<T> = std::result::Result<T, UptimeRobotError>;

/// Errors that can occur when interacting with the UptimeRobot API
#[derive(Debug, Error)]
pub enum UptimeRobotError {
    /// Failed to build HTTP client
    #[error("Failed to build HTTP client: {0}")]
    BuildHttpClient(#[source] reqwest::Error),

    /// A required value is missing or empty
    #[error("Value not specified: {name}")]
    InvalidArgument {
        /// Name of the missing value
        name: &'static str,
    },

    /// An operation that requires an API key was invoked before one was configured
    #[error("API key not configured")]
    MissingApiKey,

    /// The configured response format is not one the API supports
    ///
    /// Only detected when a response is decoded; `with_format` accepts any
    /// non-empty value.
    #[error("Unsupported response format {format:?}, expected \"json\" or \"xml\"")]
    InvalidFormat {
        /// The format that was configured
        format: String,
    },

    /// The HTTP request could not be completed
    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest_middleware::Error),
}

impl UptimeRobotError {
    /// Check if the error is retryable
    ///
    /// Returns `true` for network/connection errors and timeouts. The client
    /// never retries on its own; this is a hint for callers that do.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(reqwest_middleware::Error::Reqwest(err)) => {
                err.is_connect() || err.is_timeout()
            }
            _ => false,
        }
    }
}
