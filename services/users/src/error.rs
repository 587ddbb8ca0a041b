//! Custom error types for the users service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::error::DatabaseError;
use serde_json::json;
use thiserror::Error;

pub const EMAIL_ALREADY_EXISTS: &str = "Email already exists";
pub const CONNECTION_FAILED: &str = "Database connection failed";

/// Custom error type for the users service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed, missing or invalid input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Uniqueness violation reported by the storage engine
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Storage could not be reached
    #[error("Connection error: {0}")]
    Connection(#[source] DatabaseError),

    /// Any other storage failure; the message is what the client sees
    #[error("{0}")]
    Storage(&'static str, #[source] DatabaseError),
}

impl ApiError {
    /// HTTP status the error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Connection(_) | ApiError::Storage(..) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return to the client; never contains driver detail
    pub fn client_message(&self) -> String {
        match self {
            ApiError::Validation(msg) | ApiError::Conflict(msg) => msg.clone(),
            ApiError::Connection(_) => CONNECTION_FAILED.to_string(),
            ApiError::Storage(msg, _) => msg.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.client_message(),
        }));

        (self.status_code(), body).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
