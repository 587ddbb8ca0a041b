use std::sync::Arc;

use anyhow::Result;
use common::database::{DatabaseConfig, ensure_schema, init_pool};
use tokio::net::TcpListener;
use tracing::info;

use users::{
    AppState, config::ServiceConfig, create_router, repositories::PgUserRepository,
    service::UserService,
};

#[tokio::main]
async fn main() -> Result<()> {
    common::telemetry::init();

    info!("Starting users service");

    let service_config = ServiceConfig::from_env()?;

    // One pool for the whole process; handlers share clones of it
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;
    ensure_schema(&pool).await?;

    let user_service = UserService::new(Arc::new(PgUserRepository::new(pool)));

    let app_state = AppState {
        user_service,
        service_name: service_config.service_name.clone(),
    };

    let app = create_router(app_state);

    let address = service_config.bind_address();
    let listener = TcpListener::bind(&address).await?;
    info!("Users service listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Users service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
