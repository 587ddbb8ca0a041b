//! Application state shared across handlers

use crate::service::UserService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
    pub service_name: String,
}
