//! User creation and listing on top of a [`UserStore`]

use std::sync::Arc;

use common::error::DatabaseError;
use tracing::{error, info};

use crate::{
    error::{ApiError, ApiResult, EMAIL_ALREADY_EXISTS},
    models::User,
    repositories::UserStore,
    validation,
};

const CREATE_FAILED: &str = "Failed to create user";
const LIST_FAILED: &str = "Failed to fetch users";

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Validate a raw JSON body, insert it and read the stored row back.
    ///
    /// Validation runs before any storage access. A duplicate email is
    /// detected only through the store's uniqueness constraint.
    pub async fn create_user(&self, raw: &[u8]) -> ApiResult<User> {
        let request = validation::parse_create_request(raw).map_err(ApiError::Validation)?;
        let new_user = validation::validate_new_user(request).map_err(ApiError::Validation)?;

        let id = self
            .store
            .insert(&new_user)
            .await
            .map_err(|e| storage_error(e, CREATE_FAILED))?;

        let user = self
            .store
            .find_by_id(id)
            .await
            .map_err(|e| storage_error(e, CREATE_FAILED))?
            .ok_or_else(|| {
                error!("User {} vanished right after insert", id);
                ApiError::Storage(CREATE_FAILED, DatabaseError::Query(sqlx::Error::RowNotFound))
            })?;

        info!("Created user {} ({})", user.id, user.email);
        Ok(user)
    }

    /// All users, newest first. An empty table is an empty list.
    pub async fn list_users(&self) -> ApiResult<Vec<User>> {
        self.store
            .list_newest_first()
            .await
            .map_err(|e| storage_error(e, LIST_FAILED))
    }
}

/// Translate a storage failure into the API taxonomy, logging the detail
fn storage_error(err: DatabaseError, message: &'static str) -> ApiError {
    match err {
        DatabaseError::UniqueViolation(_) => ApiError::Conflict(EMAIL_ALREADY_EXISTS.to_string()),
        DatabaseError::Connection(_) => {
            error!("Database connection error: {}", err);
            ApiError::Connection(err)
        }
        other => {
            error!("Database error: {}", other);
            ApiError::Storage(message, other)
        }
    }
}
