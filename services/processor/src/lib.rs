//! Receives users forwarded by the scheduler and archives them as JSON files

pub mod config;
pub mod error;

use std::{path::PathBuf, sync::Arc};

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::{Map, Value, json};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::error::ProcessError;

#[derive(Clone)]
pub struct ProcessorState {
    received_dir: Arc<PathBuf>,
}

impl ProcessorState {
    pub fn new(received_dir: PathBuf) -> Self {
        Self {
            received_dir: Arc::new(received_dir),
        }
    }
}

pub fn create_router(state: ProcessorState) -> Router {
    Router::new()
        .route("/process", post(process_user))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "processor",
    }))
}

/// Validate a forwarded user and write it to `received/user_<id>.json`
async fn process_user(
    State(state): State<ProcessorState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, ProcessError> {
    if !is_json_content_type(&headers) {
        warn!("Request content-type is not application/json");
        return Err(ProcessError::InvalidContentType);
    }

    let data: Map<String, Value> = match serde_json::from_slice(&body) {
        Ok(Value::Object(map)) => map,
        _ => {
            warn!("Invalid JSON payload");
            return Err(ProcessError::InvalidPayload);
        }
    };

    let field = |key: &str| data.get(key).filter(|v| is_truthy(v));
    let (Some(id), Some(name), Some(_email)) = (field("id"), field("name"), field("email")) else {
        let payload = serde_json::Value::Object(data.clone());
        warn!("Missing required fields in payload: {}", payload);
        return Err(ProcessError::MissingFields);
    };

    let id = file_id(id).ok_or(ProcessError::InvalidId)?;
    let path = state.received_dir.join(format!("user_{id}.json"));

    let contents = serde_json::to_vec_pretty(&data)?;
    tokio::fs::write(&path, contents).await.map_err(|e| {
        error!("Failed to write file {}: {}", path.display(), e);
        ProcessError::Write(e)
    })?;

    info!("Processed user ID={} Name={}", id, display(name));

    Ok(Json(json!({ "status": "ok" })))
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json"
                || (mime.starts_with("application/") && mime.ends_with("+json"))
        })
        .unwrap_or(false)
}

/// Null, false, zero and empty strings, arrays or objects count as absent
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Id as used in the file name; restricted so it cannot escape the directory
fn file_id(id: &Value) -> Option<String> {
    match id {
        Value::Number(n) if n.is_u64() || n.is_i64() => Some(n.to_string()),
        Value::String(s) if s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') => {
            Some(s.clone())
        }
        _ => None,
    }
}

fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
