use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// `GET /health` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: f64,
    pub version: String,
    pub ready: bool,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.ready && (self.status == "healthy" || self.status == "ok")
    }
}

/// `GET /api/status` payload. The model name fields are absent while
/// the corresponding model is still loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiStatus {
    pub server: String,
    pub timestamp: f64,
    pub ultra_model_loaded: bool,
    pub advanced_model_loaded: bool,
    pub version: String,
    #[serde(default)]
    pub endpoints: Vec<String>,
    pub ultra_model: Option<String>,
    pub advanced_model: Option<String>,
}

/// `GET /api/models` payload, keyed by model identifier ("ultra",
/// "advanced", ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelCatalog {
    pub success: bool,
    pub models: HashMap<String, ModelProfile>,
    #[serde(rename = "default")]
    pub default_model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelProfile {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub recommended: bool,
}
