use std::time::Duration;

use url::Url;
use weekcast_core::{AppError, City};

/// Upstream host serving the forecast pages.
pub const DEFAULT_BASE_URL: &str = "https://www.yandex.com";

/// The upstream rejects requests carrying a library default agent.
pub const USER_AGENT: &str = "Mozilla/5.0";

/// Number of day blocks requested from the upstream.
pub const RESULT_LIMIT: u32 = 10;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`crate::ReqwestFetcher`].
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Scheme and host, without trailing slash.
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl FetchConfig {
    /// Validates `base_url` (http or https only) and strips trailing slashes.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| AppError::ConfigError(format!("Invalid base URL '{base_url}': {e}")))?;

        match parsed.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(AppError::ConfigError(format!(
                    "Base URL scheme '{scheme}' is not allowed (only http/https)"
                )));
            }
        }

        if timeout.is_zero() {
            return Err(AppError::ConfigError("Timeout must be non-zero".into()));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    /// Read configuration from environment variables.
    ///
    /// - `WEEKCAST_BASE_URL` (optional, defaults to [`DEFAULT_BASE_URL`])
    /// - `WEEKCAST_TIMEOUT_SECS` (optional, defaults to 30)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let base_url = lookup("WEEKCAST_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match lookup("WEEKCAST_TIMEOUT_SECS") {
            None => DEFAULT_TIMEOUT,
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    AppError::ConfigError(format!(
                        "Invalid WEEKCAST_TIMEOUT_SECS '{raw}': must be a positive integer"
                    ))
                })?;
                Duration::from_secs(secs)
            }
        };

        Self::new(&base_url, timeout)
    }

    /// Forecast page URL for `city`. The city is embedded as-is.
    pub fn forecast_url(&self, city: &City) -> String {
        format!(
            "{}/weather/{}/segment/details?limit={}",
            self.base_url, city, RESULT_LIMIT
        )
    }
}
