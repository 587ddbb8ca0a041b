//! Database module for handling PostgreSQL connections and operations
//!
//! This module provides the process-wide connection pool, configuration,
//! health checks and the idempotent bootstrap of the `users` table.

use crate::error::{DatabaseError, DatabaseResult};
use crate::settings;
use serde::Deserialize;
use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions},
};
use std::time::Duration;
use tracing::{error, info};

/// DDL for the `users` table. Safe to run on every start.
pub const USERS_SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        email VARCHAR(255) NOT NULL UNIQUE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

/// Database configuration struct
///
/// # Environment Variables
/// - `DB_HOST`: database host (default: "localhost")
/// - `DB_PORT`: database port (default: 5432)
/// - `DB_NAME`: database name (default: "users")
/// - `DB_USER`: user name (default: "postgres")
/// - `DB_PASSWORD`: password (default: empty)
/// - `DB_MAX_CONNECTIONS`: maximum number of pooled connections (default: 5)
/// - `DB_CONNECT_TIMEOUT`: connection timeout in seconds (default: 30)
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_user")]
    pub user: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5432
}

fn default_name() -> String {
    "users".to_string()
}

fn default_user() -> String {
    "postgres".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_connect_timeout() -> u64 {
    30
}

impl DatabaseConfig {
    /// Environment variable prefix for database settings
    pub const ENV_PREFIX: &'static str = "DB";

    /// Create a new DatabaseConfig from environment variables
    pub fn from_env() -> DatabaseResult<Self> {
        settings::load(Self::ENV_PREFIX)
            .map_err(|e| DatabaseError::Configuration(e.to_string()))
    }

    /// Typed connection options, so credentials never need URL escaping
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.name)
            .username(&self.user)
            .password(&self.password)
    }
}

/// Initialize the PostgreSQL connection pool
///
/// The pool is created once per process and cloned into request state;
/// clones share the same underlying connections.
///
/// # Arguments
///
/// * `config` - Database configuration
///
/// # Returns
///
/// * `DatabaseResult<PgPool>` - PostgreSQL connection pool or a
///   `DatabaseError::Connection` if the server cannot be reached
pub async fn init_pool(config: &DatabaseConfig) -> DatabaseResult<PgPool> {
    info!(
        "Connecting to database {} at {}:{}",
        config.name, config.host, config.port
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .connect_with(config.connect_options())
        .await
        .map_err(|e| {
            error!("Database connection failed: {}", e);
            DatabaseError::Connection(e)
        })?;

    info!("Database connection pool initialized successfully");
    Ok(pool)
}

/// Create the `users` table if it does not exist yet
///
/// An existing table is not an error. Any other DDL failure is returned
/// as `DatabaseError::Schema` and should abort startup.
pub async fn ensure_schema(pool: &PgPool) -> DatabaseResult<()> {
    sqlx::query(USERS_SCHEMA).execute(pool).await.map_err(|e| {
        error!("Schema initialization failed: {}", e);
        DatabaseError::Schema(e)
    })?;

    info!("Users table is ready");
    Ok(())
}

/// Check database connectivity
///
/// # Arguments
///
/// * `pool` - PostgreSQL connection pool
///
/// # Returns
///
/// * `DatabaseResult<bool>` - True if connection is successful
pub async fn health_check(pool: &PgPool) -> DatabaseResult<bool> {
    sqlx::query("SELECT 1").execute(pool).await?;

    Ok(true)
}
