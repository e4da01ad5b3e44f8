//! HTTP client for the restaurant API

use crate::{ClientConfig, ClientResult, TransportError};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{Restaurant, RestaurantCreate, RestaurantUpdate};

/// Collection resource path on the backend
const RESOURCE_PATH: &str = "api/restaurants";

/// HTTP client for the restaurant collection
///
/// All four operations share one response rule: a non-2xx status becomes
/// [`TransportError::Status`] and the body is not inspected; a 204 is a
/// success with no body to parse.
#[derive(Debug, Clone)]
pub struct RestaurantApi {
    client: Client,
    base_url: String,
}

impl RestaurantApi {
    /// Create a new API client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, RESOURCE_PATH)
    }

    fn record_url(&self, id: i64) -> String {
        format!("{}/{}/{}", self.base_url, RESOURCE_PATH, id)
    }

    /// Fetch the full restaurant collection
    pub async fn list(&self) -> ClientResult<Vec<Restaurant>> {
        tracing::debug!(url = %self.collection_url(), "GET restaurants");
        let response = self.client.get(self.collection_url()).send().await?;
        Self::handle_json(response).await
    }

    /// Create a new restaurant; the server assigns the id
    pub async fn create(&self, payload: &RestaurantCreate) -> ClientResult<Restaurant> {
        let response = self
            .client
            .post(self.collection_url())
            .json(payload)
            .send()
            .await?;
        Self::handle_json(response).await
    }

    /// Update the restaurant addressed by `id`
    ///
    /// The backend may answer with the updated record or with an empty
    /// body; both are success.
    pub async fn update(&self, id: i64, payload: &RestaurantUpdate) -> ClientResult<Option<Restaurant>> {
        let response = self
            .client
            .put(self.record_url(id))
            .json(payload)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status));
        }
        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        let body = response.bytes().await?;
        if body.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_slice(&body)?))
    }

    /// Delete the restaurant addressed by `id`
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        tracing::debug!(id, "DELETE restaurant");
        let response = self.client.delete(self.record_url(id)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status));
        }
        Ok(())
    }

    /// Handle a response whose success body is a required JSON payload
    async fn handle_json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status));
        }
        Ok(response.json().await?)
    }
}
