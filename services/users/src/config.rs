//! Users service configuration

use serde::Deserialize;

/// HTTP listener and identity settings
///
/// # Environment Variables
/// - `USERS_HOST`: bind address (default: "0.0.0.0")
/// - `USERS_PORT`: bind port (default: 8080)
/// - `USERS_SERVICE_NAME`: name reported by `/health` (default: "users-api")
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_service_name() -> String {
    "users-api".to_string()
}

impl ServiceConfig {
    pub const ENV_PREFIX: &'static str = "USERS";

    pub fn from_env() -> Result<Self, config::ConfigError> {
        common::settings::load(Self::ENV_PREFIX)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
