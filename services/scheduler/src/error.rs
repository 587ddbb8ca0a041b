//! Error types for the scheduler

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Failed to call users API: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Users API returned {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SchedulerResult<T> = Result<T, SchedulerError>;
