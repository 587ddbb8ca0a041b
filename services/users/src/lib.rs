//! Users service: create and list user records over a small JSON API

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod service;
pub mod state;
pub mod validation;

pub use routes::create_router;
pub use state::AppState;
