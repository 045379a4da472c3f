use serde::{Deserialize, Serialize};

/// Processing options forwarded to the removal service. The `model` and
/// `positioning` strings are opaque to the client; their semantics are
/// server-defined.
#[derive(Debug, Clone)]
pub struct RemovalOptions {
    pub model: String,
    pub positioning: String,
    pub enhance: bool,
    pub create_variants: bool,
}

impl Default for RemovalOptions {
    fn default() -> Self {
        RemovalOptions {
            model: "ultra".to_string(),
            positioning: "smart".to_string(),
            enhance: true,
            create_variants: true,
        }
    }
}

impl RemovalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_positioning(mut self, positioning: impl Into<String>) -> Self {
        self.positioning = positioning.into();
        self
    }

    pub fn with_enhance(mut self, enhance: bool) -> Self {
        self.enhance = enhance;
        self
    }

    pub fn with_variants(mut self, create_variants: bool) -> Self {
        self.create_variants = create_variants;
        self
    }
}

/// Wire payload for `POST /api/remove-background-base64`.
#[derive(Debug, Clone, Serialize)]
pub struct RemovalRequest {
    pub image_base64: String,
    pub model: String,
    pub positioning: String,
    pub enhance: bool,
    pub create_variants: bool,
}

impl RemovalRequest {
    pub fn new(image_base64: String, options: &RemovalOptions) -> Self {
        RemovalRequest {
            image_base64,
            model: options.model.clone(),
            positioning: options.positioning.clone(),
            enhance: options.enhance,
            create_variants: options.create_variants,
        }
    }
}

/// Wire shape of the removal endpoint's JSON response. `result` is
/// present when `success` is true, `error` when it is false.
#[derive(Debug, Clone, Deserialize)]
pub struct RemovalResponse {
    pub success: bool,
    pub result: Option<RemovalResult>,
    pub variants: Option<Vec<ImageVariant>>,
    pub error: Option<String>,
}

/// The primary processed image. `download_url` is a path relative to
/// the configured base URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemovalResult {
    pub filename: String,
    pub download_url: String,
    pub model_used: String,
    #[serde(rename = "processing_time")]
    pub processing_time_seconds: f64,
    pub size_bytes: u64,
}

/// An alternate rendering returned alongside the primary result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageVariant {
    pub filename: String,
    pub download_url: String,
    pub size_bytes: u64,
}

/// A successful removal: the primary result plus any variants the
/// server produced (empty when variants were not requested or sent).
#[derive(Debug, Clone)]
pub struct RemovalOutcome {
    pub result: RemovalResult,
    pub variants: Vec<ImageVariant>,
}
