use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    api::endpoint_url,
    error::{CutoutError, Result},
    models::{ApiStatus, HealthStatus, ModelCatalog},
};

/// Client for the service's introspection endpoints.
#[derive(Clone)]
pub struct ServiceClient {
    http: Client,
    base_url: String,
}

impl ServiceClient {
    pub fn new(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    /// Quick liveness probe against `/health`.
    pub async fn health(&self) -> Result<HealthStatus> {
        self.get_json("/health").await
    }

    /// Server and model-loading state from `/api/status`.
    pub async fn status(&self) -> Result<ApiStatus> {
        self.get_json("/api/status").await
    }

    /// The catalog of processing models the server offers.
    pub async fn models(&self) -> Result<ModelCatalog> {
        self.get_json("/api/models").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = endpoint_url(&self.base_url, path)?;

        log::debug!("Querying {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Err(CutoutError::EmptyResponse);
        }

        serde_json::from_str(&text)
            .map_err(|e| CutoutError::Decoding(format!("{} (HTTP {}): {}", path, status, e)))
    }
}
