//! Users service routes

use axum::{
    Json, Router,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{MethodRouter, get},
};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::{
    error::ApiError, middleware::cors_middleware, models::UserResponse, state::AppState,
    validation::INVALID_PAYLOAD,
};

/// Create the router for the users service
///
/// `/` is served as an alias of `/users`.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", users_routes())
        .route("/users", users_routes())
        .route("/health", get(health_check))
        .fallback(not_found)
        .layer(middleware::from_fn(cors_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn users_routes() -> MethodRouter<AppState> {
    // `get` would also answer HEAD; only GET and POST are served here
    get(get_users)
        .head(method_not_allowed)
        .post(create_user)
        .fallback(method_not_allowed)
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": state.service_name,
    }))
}

/// Create a new user from a raw JSON body
pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let body = body.map_err(|e| {
        warn!("Rejected request body: {}", e);
        ApiError::Validation(INVALID_PAYLOAD.to_string())
    })?;
    let user = state.user_service.create_user(&body).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Get all users, newest first
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let users: Vec<UserResponse> = state
        .user_service
        .list_users()
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(Json(users))
}

async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}
