use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use scheduler::{
    Scheduler,
    client::{HttpForwarder, UsersApiClient},
    config::SchedulerConfig,
};

#[tokio::main]
async fn main() -> Result<()> {
    common::telemetry::init();

    info!("Starting scheduler service");

    let config = SchedulerConfig::from_env().context("Invalid scheduler configuration")?;

    let http = reqwest::Client::new();
    let users_api = UsersApiClient::new(http.clone(), &config.users_api_url);
    let forwarder = Arc::new(HttpForwarder::new(http, &config.processor_url));

    let scheduler = Scheduler::new(config, users_api, forwarder);
    scheduler
        .ensure_directories()
        .await
        .context("Failed to create data directories")?;

    scheduler
        .run(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await;

    Ok(())
}
