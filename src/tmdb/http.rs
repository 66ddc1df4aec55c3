use super::{Result, TmdbError};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Upper bound for a single TMDB round trip
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client wrapper bound to one API base URL
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("netstar/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(TmdbError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Build full URL from endpoint
    #[must_use]
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Execute GET request with query parameters and parse the JSON body
    pub async fn get_with_params<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        tracing::debug!(endpoint, "TMDB API request");

        let response = self
            .client
            .get(self.url(endpoint))
            .query(params)
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Anything but 200 is an error carrying the body verbatim
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            tracing::debug!(status = status.as_u16(), "TMDB API returned an error");
            return Err(TmdbError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
