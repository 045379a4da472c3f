pub mod api;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;

pub use api::{CutoutClient, FileClient, RemovalClient, ServiceClient};
pub use config::ClientConfig;
pub use error::{CutoutError, Result};
pub use models::*;
