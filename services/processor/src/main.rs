use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

use processor::{ProcessorState, config::ProcessorConfig, create_router};

#[tokio::main]
async fn main() -> Result<()> {
    common::telemetry::init();

    info!("Starting processor service");

    let config = ProcessorConfig::from_env()?;

    let received_dir = config.received_dir();
    tokio::fs::create_dir_all(&received_dir)
        .await
        .with_context(|| format!("Failed to create {}", received_dir.display()))?;

    let app = create_router(ProcessorState::new(received_dir));

    let address = config.bind_address();
    let listener = TcpListener::bind(&address).await?;
    info!("Processor listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    Ok(())
}
