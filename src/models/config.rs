//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::backend::endpoints::DEFAULT_API_BASE_URL;

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_metrics_poll_interval_secs() -> u64 {
    5
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    /// Signing key for flash message cookies. At least 64 bytes.
    pub secret: String,
    /// Base URL of the management API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Session cookie forwarded on every API request.
    #[serde(default)]
    pub api_cookie: Option<String>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// How often the performance page polls for fresh metrics.
    #[serde(default = "default_metrics_poll_interval_secs")]
    pub metrics_poll_interval_secs: u64,
}
