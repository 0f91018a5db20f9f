//! Client error types.

use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
///
/// Network failures, non-2xx statuses, and malformed JSON bodies are kept
/// distinct so callers can tell "endpoint unreachable" apart from
/// "zero results".
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Sentiment analysis failed: {0}")]
    Sentiment(#[source] Box<ClientError>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// True if the error came out of the sentiment service rather than a
    /// dealership endpoint.
    pub fn is_sentiment(&self) -> bool {
        matches!(self, ClientError::Sentiment(_))
    }
}
