use reqwest::Client;
use weekcast_core::error::FetchError;
use weekcast_core::models::{City, RawDocument};
use weekcast_core::traits::Fetcher;

use crate::config::{FetchConfig, USER_AGENT};

/// HTTP fetcher using reqwest.
///
/// Issues exactly one GET per call with the fixed browser User-Agent. No
/// retries; any transport failure, non-success status, or empty body is
/// returned as a [`FetchError`].
#[derive(Clone)]
pub struct ReqwestFetcher {
    client: Client,
    config: FetchConfig,
}

impl ReqwestFetcher {
    pub fn with_config(config: FetchConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client, config })
    }
}

impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, city: &City) -> Result<RawDocument, FetchError> {
        let url = self.config.forecast_url(city);
        tracing::debug!(%url, "GET forecast page");

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::warn!(%url, error = %e, "Forecast request failed");
            if e.is_timeout() {
                FetchError::Timeout(self.config.timeout)
            } else if e.is_connect() {
                FetchError::Network(format!("Connection failed: {e}"))
            } else {
                FetchError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "Upstream returned error status");
            return Err(FetchError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(self.config.timeout)
            } else {
                FetchError::Network(format!("Failed to read response body: {e}"))
            }
        })?;

        if body.is_empty() {
            return Err(FetchError::EmptyBody(url));
        }

        Ok(RawDocument::new(body.to_vec()))
    }
}
