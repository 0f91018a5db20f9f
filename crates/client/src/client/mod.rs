//! HTTP client for the CarHub dealership endpoints.

pub mod dealers;
pub mod reviews;
pub mod sentiment;

use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::error::{ClientError, Result};

/// HTTP client for the dealership cloud-function endpoints.
#[derive(Debug, Clone)]
pub struct CarHubClient {
    client: reqwest::Client,
    base_url: String,
}

impl CarHubClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create from environment (CARHUB_URL or default).
    pub fn from_env() -> Self {
        Self::new(Config::from_env().base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue a GET against an endpoint and decode the JSON body.
    ///
    /// Query parameters come from any serializable struct; `None` fields are
    /// skipped by serde, so a filter is present on the wire exactly when it
    /// was supplied.
    pub async fn get_json<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self
            .client
            .get(self.url(path))
            .header(CONTENT_TYPE, "application/json")
            .query(query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Issue a POST with a JSON payload and return the raw response.
    ///
    /// The body is left unparsed; callers that expect JSON can decode it
    /// themselves. Transport failures still surface as typed errors.
    pub async fn post_json<B>(&self, path: &str, payload: &B) -> Result<reqwest::Response>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .client
            .post(self.url(path))
            .json(payload)
            .send()
            .await?;
        Ok(response)
    }

    /// Handle error responses.
    ///
    /// The body is read as text first so a malformed JSON payload is
    /// reported as a decode error, not conflated with transport failures.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body).map_err(ClientError::from)
        } else if status.as_u16() == 404 {
            Err(ClientError::NotFound {
                resource: "Resource".to_string(),
            })
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}
