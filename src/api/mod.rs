pub mod file_client;
pub mod removal_client;
pub mod service_client;

use reqwest::{Client, Url};

use crate::{
    config::ClientConfig,
    error::{CutoutError, Result},
};

pub use file_client::FileClient;
pub use removal_client::RemovalClient;
pub use service_client::ServiceClient;

/// Entry point for the removal service. Builds one `reqwest::Client`
/// and shares it across the sub-clients; holds no other state, so
/// cloning is cheap and calls are independent of each other.
#[derive(Clone)]
pub struct CutoutClient {
    removal_client: RemovalClient,
    file_client: FileClient,
    service_client: ServiceClient,
}

impl CutoutClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CutoutError::Config(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = config.base_url.trim_end_matches('/').to_string();

        Ok(Self {
            removal_client: RemovalClient::new(http.clone(), base_url.clone()),
            file_client: FileClient::new(http.clone(), base_url.clone()),
            service_client: ServiceClient::new(http, base_url),
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    pub fn removal(&self) -> &RemovalClient {
        &self.removal_client
    }

    pub fn files(&self) -> &FileClient {
        &self.file_client
    }

    pub fn service(&self) -> &ServiceClient {
        &self.service_client
    }
}

/// Join the base URL and an absolute path by concatenation and validate
/// the product. Fails before any network I/O when the base URL is empty
/// or the combined string is not a parseable URL.
pub(crate) fn endpoint_url(base_url: &str, path: &str) -> Result<Url> {
    let base = base_url.trim_end_matches('/');
    if base.is_empty() {
        return Err(CutoutError::UrlConstruction("Base URL is empty".into()));
    }

    let full = if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    };

    Url::parse(&full).map_err(|e| CutoutError::UrlConstruction(format!("{}: {}", full, e)))
}
