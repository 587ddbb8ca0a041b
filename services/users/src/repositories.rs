//! Repositories for database operations

use async_trait::async_trait;
use common::error::DatabaseResult;
use sqlx::PgPool;
use tracing::debug;

use crate::models::{NewUser, User};

/// Storage seam for user records
///
/// Implementations must enforce email uniqueness themselves and report a
/// duplicate as `DatabaseError::UniqueViolation`. Callers never pre-check.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a row and return its generated id
    async fn insert(&self, new_user: &NewUser) -> DatabaseResult<i64>;

    /// Find a user by ID
    async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<User>>;

    /// All users, most recent first
    async fn list_newest_first(&self) -> DatabaseResult<Vec<User>>;
}

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserRepository {
    async fn insert(&self, new_user: &NewUser) -> DatabaseResult<i64> {
        debug!("Inserting user with email {}", new_user.email);

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (name, email)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(&new_user.name)
        .bind(&new_user.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn list_newest_first(&self) -> DatabaseResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, created_at
            FROM users
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }
}
