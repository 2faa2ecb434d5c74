//! Review API client.
//!
//! One authenticated GET per poll cycle against the homework-statuses
//! endpoint. The concrete client sits behind [`HomeworkApi`] so the loop can
//! be exercised with scripted responses in tests.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client as HttpClient, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::Config;
use crate::error::FetchError;

/// Source of homework status data.
#[async_trait]
pub trait HomeworkApi: Send + Sync {
    /// Fetch homework statuses updated at or after `from_date`
    /// (seconds since the Unix epoch).
    async fn get_homework_statuses(&self, from_date: i64) -> Result<Value, FetchError>;
}

/// HTTP client for the Practicum review API.
pub struct PracticumClient {
    http: HttpClient,
    endpoint: Url,
    token: String,
}

impl PracticumClient {
    /// Build a client with the explicit timeouts from `config`.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let http = HttpClient::builder()
            .timeout(config.http.timeout)
            .connect_timeout(config.http.connect_timeout)
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            endpoint: config.endpoint.clone(),
            token: config.practicum_token.clone(),
        }
    }
}

#[async_trait]
impl HomeworkApi for PracticumClient {
    async fn get_homework_statuses(&self, from_date: i64) -> Result<Value, FetchError> {
        debug!(endpoint = %self.endpoint, from_date, "Fetching homework statuses");

        let response = self
            .http
            .get(self.endpoint.clone())
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::BadStatus {
                url: self.endpoint.to_string(),
                status,
            });
        }

        let value = response.json::<Value>().await.map_err(FetchError::Decode)?;
        debug!("Review API response decoded");

        Ok(value)
    }
}
