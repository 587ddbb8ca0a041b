//! Custom error types for the common library
//!
//! This module defines the storage error taxonomy shared by every service
//! that talks to the database.

use sqlx::Error as SqlxError;
use thiserror::Error;

/// Custom error type for database operations
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The database could not be reached or the pool is unusable
    #[error("Database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// A uniqueness constraint rejected the write
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    /// Schema bootstrap failed
    #[error("Database schema error: {0}")]
    Schema(#[source] SqlxError),

    /// Error occurred during database query execution
    #[error("Database query error: {0}")]
    Query(#[source] SqlxError),

    /// Configuration error
    #[error("Database configuration error: {0}")]
    Configuration(String),
}

impl DatabaseError {
    /// Whether the error means the storage engine refused a duplicate value
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, DatabaseError::UniqueViolation(_))
    }

    /// Whether the error means the database could not be reached at all
    pub fn is_connection(&self) -> bool {
        matches!(self, DatabaseError::Connection(_))
    }
}

impl From<SqlxError> for DatabaseError {
    fn from(err: SqlxError) -> Self {
        match err {
            SqlxError::Io(_)
            | SqlxError::Tls(_)
            | SqlxError::PoolTimedOut
            | SqlxError::PoolClosed
            | SqlxError::WorkerCrashed => DatabaseError::Connection(err),
            SqlxError::Database(ref db_err) if db_err.is_unique_violation() => {
                let constraint = db_err.constraint().unwrap_or("unknown").to_string();
                DatabaseError::UniqueViolation(constraint)
            }
            other => DatabaseError::Query(other),
        }
    }
}

/// Type alias for Result with DatabaseError
pub type DatabaseResult<T> = Result<T, DatabaseError>;
