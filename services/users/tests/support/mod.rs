//! Test doubles and helpers shared by the users service integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use chrono::Utc;
use common::error::{DatabaseError, DatabaseResult};
use users::{
    AppState, create_router,
    models::{NewUser, User},
    repositories::UserStore,
    service::UserService,
};

/// In-memory store that enforces email uniqueness under its own lock, the
/// way the database constraint does.
#[derive(Default)]
pub struct MemoryUserStore {
    rows: Mutex<Vec<User>>,
}

impl MemoryUserStore {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, new_user: &NewUser) -> DatabaseResult<i64> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|u| u.email == new_user.email) {
            return Err(DatabaseError::UniqueViolation("users_email_key".to_string()));
        }

        let id = rows.last().map(|u| u.id + 1).unwrap_or(1);
        rows.push(User {
            id,
            name: new_user.name.clone(),
            email: new_user.email.clone(),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<User>> {
        Ok(self.rows.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn list_newest_first(&self) -> DatabaseResult<Vec<User>> {
        let mut users = self.rows.lock().unwrap().clone();
        users.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(users)
    }
}

/// Which failure a [`FailingStore`] reports
#[derive(Clone, Copy)]
pub enum Failure {
    Connection,
    Query,
}

/// Store whose every call fails
pub struct FailingStore(pub Failure);

impl FailingStore {
    fn error(&self) -> DatabaseError {
        match self.0 {
            Failure::Connection => DatabaseError::Connection(sqlx::Error::PoolTimedOut),
            Failure::Query => DatabaseError::Query(sqlx::Error::Protocol(
                "relation \"users\" does not exist".to_string(),
            )),
        }
    }
}

#[async_trait]
impl UserStore for FailingStore {
    async fn insert(&self, _new_user: &NewUser) -> DatabaseResult<i64> {
        Err(self.error())
    }

    async fn find_by_id(&self, _id: i64) -> DatabaseResult<Option<User>> {
        Err(self.error())
    }

    async fn list_newest_first(&self) -> DatabaseResult<Vec<User>> {
        Err(self.error())
    }
}

pub fn app_with(store: Arc<dyn UserStore>) -> Router {
    create_router(AppState {
        user_service: UserService::new(store),
        service_name: "users-api".to_string(),
    })
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}
