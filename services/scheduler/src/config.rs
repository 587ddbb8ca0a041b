//! Scheduler configuration

use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

/// # Environment Variables
/// - `SCHEDULER_USERS_API_URL`: base URL of the users API (required)
/// - `SCHEDULER_PROCESSOR_URL`: base URL of the processor (required)
/// - `SCHEDULER_INTERVAL_SECONDS`: pause between iterations (default: 10)
/// - `SCHEDULER_DATA_DIR`: root data directory (default: "/data")
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulerConfig {
    pub users_api_url: String,
    pub processor_url: String,
    #[serde(default = "default_interval_seconds")]
    pub interval_seconds: u64,
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_interval_seconds() -> u64 {
    10
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("/data")
}

impl SchedulerConfig {
    pub const ENV_PREFIX: &'static str = "SCHEDULER";

    pub fn from_env() -> Result<Self, config::ConfigError> {
        common::settings::load(Self::ENV_PREFIX)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds)
    }

    pub fn incoming_dir(&self) -> PathBuf {
        self.data_dir.join("incoming")
    }

    pub fn processed_dir(&self) -> PathBuf {
        self.data_dir.join("processed")
    }
}
