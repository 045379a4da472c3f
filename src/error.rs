use thiserror::Error;

/// Errors surfaced by the cutout client. Every failure is local to the
/// call that produced it; nothing is retried or recovered internally.
#[derive(Debug, Error)]
pub enum CutoutError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Image encoding error: {0}")]
    ImageEncoding(String),

    #[error("Image decoding error: {0}")]
    ImageDecoding(String),

    #[error("URL construction error: {0}")]
    UrlConstruction(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Empty response body")]
    EmptyResponse,

    #[error("Response decoding error: {0}")]
    Decoding(String),

    #[error("Server error: {0}")]
    Server(String),
}

impl CutoutError {
    /// Message reported by the remote service, when the failure came
    /// from a `success=false` response.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            CutoutError::Server(msg) => Some(msg),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CutoutError>;
