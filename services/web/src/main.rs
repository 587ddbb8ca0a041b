use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;

use web::{WebState, config::WebConfig, create_router};

#[tokio::main]
async fn main() -> Result<()> {
    common::telemetry::init();

    let config = WebConfig::from_env()?;
    info!("Starting web UI for API at {}", config.api_base_url);

    let app = create_router(WebState::new(&config.api_base_url));

    let address = config.bind_address();
    let listener = TcpListener::bind(&address).await?;
    info!("Web UI listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    Ok(())
}
