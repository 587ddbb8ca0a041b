//! Error types for the processor

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Invalid content type")]
    InvalidContentType,

    #[error("Invalid JSON payload")]
    InvalidPayload,

    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid user id")]
    InvalidId,

    #[error("Failed to write file: {0}")]
    Write(#[from] std::io::Error),

    #[error("Failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}

impl IntoResponse for ProcessError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ProcessError::Write(_) | ProcessError::Encode(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
            other => (StatusCode::BAD_REQUEST, other.to_string()),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
