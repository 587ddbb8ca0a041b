//! Static single-page UI for creating and listing users
//!
//! The page itself is plain HTML and JavaScript embedded at compile time.
//! The only dynamic piece is `/config.js`, which tells the page where the
//! users API lives.

pub mod config;

use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse},
    routing::get,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

const INDEX_HTML: &str = include_str!("../static/index.html");

#[derive(Clone)]
pub struct WebState {
    api_base_url: Arc<str>,
}

impl WebState {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            api_base_url: Arc::from(api_base_url.trim_end_matches('/')),
        }
    }
}

pub fn create_router(state: WebState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/index.html", get(index))
        .route("/config.js", get(config_js))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Runtime configuration script. The URL is emitted as a JSON string
/// literal so it cannot break out of the assignment.
async fn config_js(State(state): State<WebState>) -> impl IntoResponse {
    let url = serde_json::Value::String(state.api_base_url.to_string());
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        format!("window.API_BASE_URL = {url};\n"),
    )
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}
