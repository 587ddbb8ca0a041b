//! Common library for the user management services
//!
//! This crate provides shared functionality used across the services in
//! the workspace: database connectivity and schema bootstrap, error
//! handling, environment configuration and logging setup.
//!
//! ```rust,no_run
//! use common::database::{DatabaseConfig, ensure_schema, init_pool};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env()?;
//!     let pool = init_pool(&config).await?;
//!     ensure_schema(&pool).await?;
//!     Ok(())
//! }
//! ```

pub mod database;
pub mod error;
pub mod settings;
pub mod telemetry;
