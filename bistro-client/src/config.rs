//! Client configuration

use crate::{ClientResult, RestaurantApi};

/// Client configuration for connecting to the restaurant backend
///
/// # Environment variables
///
/// | Environment variable | Default |
/// |----------------------|---------|
/// | BISTRO_API_URL | http://localhost:3000 |
/// | BISTRO_API_TIMEOUT_SECS | 30 |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "http://localhost:3000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("BISTRO_API_URL").unwrap_or_else(|_| "http://localhost:3000".into());
        let timeout = std::env::var("BISTRO_API_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(30);
        Self::new(base_url).with_timeout(timeout)
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an API client from this configuration
    pub fn build_api(&self) -> ClientResult<RestaurantApi> {
        RestaurantApi::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3000")
    }
}
