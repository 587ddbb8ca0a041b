//! HTTP clients for the users API and the processor

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{info, warn};

use crate::{
    error::{SchedulerError, SchedulerResult},
    models::{SampleUser, User},
};

/// Client for the users API
#[derive(Clone)]
pub struct UsersApiClient {
    http: Client,
    base_url: String,
}

impl UsersApiClient {
    pub fn new(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a user; only 200 and 201 count as success
    pub async fn create_user(&self, payload: &SampleUser) -> SchedulerResult<User> {
        let response = self
            .http
            .post(format!("{}/users", self.base_url))
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK && status != StatusCode::CREATED {
            let body = response.text().await.unwrap_or_default();
            return Err(SchedulerError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<User>().await?)
    }
}

/// Destination for users selected during file processing
#[async_trait]
pub trait Forwarder: Send + Sync {
    /// Deliver the raw file contents. Best effort: failures are logged by
    /// the implementation, never returned.
    async fn forward(&self, data: &[u8]);
}

/// Forwards to the processor's `/process` endpoint
#[derive(Clone)]
pub struct HttpForwarder {
    http: Client,
    base_url: String,
}

impl HttpForwarder {
    pub fn new(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Forwarder for HttpForwarder {
    async fn forward(&self, data: &[u8]) {
        let result = self
            .http
            .post(format!("{}/process", self.base_url))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(data.to_vec())
            .send()
            .await;

        match result {
            Ok(response) => info!("Processor responded with status {}", response.status()),
            Err(e) => warn!("Failed to send data to processor: {}", e),
        }
    }
}
