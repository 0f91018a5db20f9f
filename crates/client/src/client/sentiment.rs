//! Sentiment-analysis client.
//!
//! Talks to a hosted natural-language-understanding service. The request
//! mirrors the service's `/v1/analyze` contract: document-level sentiment
//! targeted at the submitted text, authenticated with basic auth where the
//! username is the literal string "apikey".

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{ClientError, Result};
use carhub_core::Sentiment;

/// API version date sent with every analyze call.
const API_VERSION: &str = "2021-08-01";

/// Client for the external sentiment-analysis service.
#[derive(Debug, Clone)]
pub struct SentimentClient {
    client: reqwest::Client,
    service_url: String,
    api_key: String,
    concurrency: usize,
}

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    text: &'a str,
    language: &'a str,
    features: Features<'a>,
}

#[derive(Debug, Serialize)]
struct Features<'a> {
    sentiment: SentimentOptions<'a>,
}

#[derive(Debug, Serialize)]
struct SentimentOptions<'a> {
    targets: Vec<&'a str>,
}

#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    sentiment: DocumentSentiment,
}

#[derive(Debug, Deserialize)]
struct DocumentSentiment {
    document: DocumentLabel,
}

#[derive(Debug, Deserialize)]
struct DocumentLabel {
    label: String,
}

impl SentimentClient {
    /// Create a new client for the given service URL and API key.
    pub fn new(service_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            service_url: service_url.into(),
            api_key: api_key.into(),
            concurrency: 4,
        }
    }

    /// Create from environment (SENTIMENT_URL / SENTIMENT_API_KEY).
    pub fn from_env() -> Self {
        Self::from_config(&Config::from_env())
    }

    /// Create from a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.sentiment_url, &config.sentiment_api_key)
            .with_concurrency(config.sentiment_concurrency)
    }

    /// Set the in-flight call limit used when annotating review lists.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// The in-flight call limit for bulk annotation.
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Classify the sentiment of a piece of text.
    ///
    /// Returns the parsed document-level label; an unrecognized label is an
    /// `InvalidResponse` error rather than a silent default.
    pub async fn analyze(&self, text: &str) -> Result<Sentiment> {
        let request = AnalyzeRequest {
            text,
            language: "en",
            features: Features {
                sentiment: SentimentOptions { targets: vec![text] },
            },
        };

        let response = self
            .client
            .post(format!("{}/v1/analyze", self.service_url))
            .query(&[("version", API_VERSION)])
            .basic_auth("apikey", Some(&self.api_key))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: AnalyzeResponse = serde_json::from_str(&body)?;
        parsed
            .sentiment
            .document
            .label
            .parse::<Sentiment>()
            .map_err(|err| ClientError::InvalidResponse(err.to_string()))
    }
}
