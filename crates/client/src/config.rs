use std::env;

/// Client configuration loaded from environment variables.
///
/// The dealership endpoints and the sentiment service are both externally
/// hosted, so everything here is a URL or credential; nothing is baked into
/// the binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the dealership cloud-function endpoints
    /// (default: "http://localhost:3000")
    pub base_url: String,
    /// Base URL of the sentiment-analysis service
    /// (default: "http://localhost:5050")
    pub sentiment_url: String,
    /// API key for the sentiment-analysis service (default: empty)
    pub sentiment_api_key: String,
    /// Maximum number of in-flight sentiment calls when annotating a
    /// review list (default: 4)
    pub sentiment_concurrency: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CARHUB_URL` - Dealership endpoint base URL (default: "http://localhost:3000")
    /// - `SENTIMENT_URL` - Sentiment service base URL (default: "http://localhost:5050")
    /// - `SENTIMENT_API_KEY` - Sentiment service API key (default: empty)
    /// - `SENTIMENT_CONCURRENCY` - In-flight sentiment call limit (default: 4)
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("CARHUB_URL").unwrap_or_else(|_| "http://localhost:3000".to_string()),
            sentiment_url: env::var("SENTIMENT_URL")
                .unwrap_or_else(|_| "http://localhost:5050".to_string()),
            sentiment_api_key: env::var("SENTIMENT_API_KEY").unwrap_or_default(),
            sentiment_concurrency: env::var("SENTIMENT_CONCURRENCY")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&n| n > 0)
                .unwrap_or(4),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
