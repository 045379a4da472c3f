use image::DynamicImage;
use reqwest::Client;

use crate::{
    api::endpoint_url,
    error::{CutoutError, Result},
};

/// Client for fetching processed files off the service. All paths are
/// relative to the configured base URL.
#[derive(Clone)]
pub struct FileClient {
    http: Client,
    base_url: String,
}

impl FileClient {
    pub fn new(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    /// Fetch the raw bytes behind a `download_url` path from a removal
    /// result or variant.
    pub async fn download(&self, relative_path: &str) -> Result<Vec<u8>> {
        let url = endpoint_url(&self.base_url, relative_path)?;

        log::debug!("Downloading {}", url);

        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(CutoutError::Server(format!(
                "Download failed with HTTP {}",
                response.status()
            )));
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(CutoutError::EmptyResponse);
        }

        Ok(bytes.to_vec())
    }

    /// Fetch and decode a processed image.
    pub async fn download_image(&self, relative_path: &str) -> Result<DynamicImage> {
        let bytes = self.download(relative_path).await?;
        image::load_from_memory(&bytes)
            .map_err(|e| CutoutError::ImageDecoding(format!("{}: {}", relative_path, e)))
    }

    /// Fetch a result file by name via the download endpoint.
    pub async fn download_by_name(&self, filename: &str) -> Result<Vec<u8>> {
        self.download(&format!("/api/download/{}", filename)).await
    }

    /// Fetch the inline preview rendering of a result file.
    pub async fn preview(&self, filename: &str) -> Result<Vec<u8>> {
        self.download(&format!("/api/preview/{}", filename)).await
    }
}
