use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Connection settings for the removal service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read settings from `CUTOUT_API_URL` and `CUTOUT_TIMEOUT_SECS`,
    /// falling back to the defaults for anything unset.
    pub fn from_env() -> Self {
        let base_url = env::var("CUTOUT_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout_secs = env::var("CUTOUT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        ClientConfig {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
