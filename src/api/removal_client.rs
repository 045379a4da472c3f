use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::{DynamicImage, ImageFormat};
use reqwest::{header, Client};

use crate::{
    api::endpoint_url,
    error::{CutoutError, Result},
    models::{RemovalOptions, RemovalOutcome, RemovalRequest, RemovalResponse},
};

const REMOVE_BASE64_PATH: &str = "/api/remove-background-base64";

/// Client for the background-removal endpoint.
#[derive(Clone)]
pub struct RemovalClient {
    http: Client,
    base_url: String,
}

impl RemovalClient {
    pub fn new(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    /// Remove the background from a decoded image. The image is
    /// re-encoded as PNG (lossless) before upload.
    pub async fn remove_background(
        &self,
        image: &DynamicImage,
        options: &RemovalOptions,
    ) -> Result<RemovalOutcome> {
        let png_bytes = encode_png(image)?;
        self.remove_background_bytes(&png_bytes, options).await
    }

    /// Remove the background from already-encoded image bytes. The
    /// returned future resolves exactly once, with the decoded result
    /// or a single error; there are no retries.
    pub async fn remove_background_bytes(
        &self,
        image_bytes: &[u8],
        options: &RemovalOptions,
    ) -> Result<RemovalOutcome> {
        if image_bytes.is_empty() {
            return Err(CutoutError::ImageEncoding("Image data is empty".into()));
        }

        let url = endpoint_url(&self.base_url, REMOVE_BASE64_PATH)?;

        let request = RemovalRequest::new(BASE64.encode(image_bytes), options);
        let body = serde_json::to_string(&request)
            .map_err(|e| CutoutError::Serialization(e.to_string()))?;

        log::info!(
            "Removing background: model={}, positioning={}, {} image bytes",
            request.model,
            request.positioning,
            image_bytes.len()
        );

        let response = self
            .http
            .post(url)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Err(CutoutError::EmptyResponse);
        }

        // The server pairs error statuses with the same JSON shape, so
        // the body's `success` field is authoritative, not the status.
        let removal: RemovalResponse = serde_json::from_str(&text)
            .map_err(|e| CutoutError::Decoding(format!("HTTP {}: {}", status, e)))?;

        if !removal.success {
            let message = removal.error.unwrap_or_else(|| "Unknown error".to_string());
            log::warn!("Removal rejected by server: {}", message);
            return Err(CutoutError::Server(message));
        }

        let result = removal
            .result
            .ok_or_else(|| CutoutError::Decoding("Missing result in success response".into()))?;

        log::info!(
            "Removal complete: {} via {} in {:.2}s",
            result.filename,
            result.model_used,
            result.processing_time_seconds
        );

        Ok(RemovalOutcome {
            result,
            variants: removal.variants.unwrap_or_default(),
        })
    }
}

/// Re-encode a decoded image as PNG for upload.
pub(crate) fn encode_png(image: &DynamicImage) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| CutoutError::ImageEncoding(e.to_string()))?;
    Ok(buffer.into_inner())
}
