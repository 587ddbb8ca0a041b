//! Web UI server configuration

use serde::Deserialize;

/// # Environment Variables
/// - `WEB_HOST`: bind address (default: "0.0.0.0")
/// - `WEB_PORT`: bind port (default: 3000)
/// - `WEB_API_BASE_URL`: users API the page talks to (default: "http://localhost:8080")
#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_api_base_url() -> String {
    "http://localhost:8080".to_string()
}

impl WebConfig {
    pub const ENV_PREFIX: &'static str = "WEB";

    pub fn from_env() -> Result<Self, config::ConfigError> {
        common::settings::load(Self::ENV_PREFIX)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
