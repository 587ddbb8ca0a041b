//! Processor configuration

use serde::Deserialize;
use std::path::PathBuf;

/// # Environment Variables
/// - `PROCESSOR_HOST`: bind address (default: "0.0.0.0")
/// - `PROCESSOR_PORT`: bind port (default: 5000)
/// - `PROCESSOR_DATA_DIR`: root data directory (default: "/data")
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessorConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("/data")
}

impl ProcessorConfig {
    pub const ENV_PREFIX: &'static str = "PROCESSOR";

    pub fn from_env() -> Result<Self, config::ConfigError> {
        common::settings::load(Self::ENV_PREFIX)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Where accepted payloads are archived
    pub fn received_dir(&self) -> PathBuf {
        self.data_dir.join("received")
    }
}
