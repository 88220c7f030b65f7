//! Custom error types for pubmed-paper-fetcher.
//!
//! Library functions return `Result<T, FetcherError>`; the binary wraps them
//! in `anyhow` for user-facing diagnostics.

use thiserror::Error;

/// Main error type for fetcher operations.
#[derive(Debug, Error)]
pub enum FetcherError {
    /// Network/HTTP transport error, including timeouts
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Remote endpoint answered with a non-success status
    #[error("API error: {code} - {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message from the endpoint
        message: String,
    },

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl FetcherError {
    /// True when the request never produced a usable HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(e) if e.is_connect() || e.is_timeout() || e.is_request())
    }
}

/// Result type alias using `FetcherError`
pub type Result<T> = std::result::Result<T, FetcherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = FetcherError::Api {
            code: 503,
            message: "esearch unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 503 - esearch unavailable");
    }
}
