//! Periodic traffic generator for the users API
//!
//! Each iteration creates a sample user through the API, drops the result
//! into an incoming directory, then sweeps that directory: selected users
//! are forwarded to the processor and every file ends up in `processed`.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;

use std::{future::Future, sync::Arc};

use tokio::fs;
use tracing::{error, info};

use crate::{
    client::{Forwarder, UsersApiClient},
    config::SchedulerConfig,
    error::SchedulerResult,
};

pub struct Scheduler {
    config: SchedulerConfig,
    users_api: UsersApiClient,
    forwarder: Arc<dyn Forwarder>,
    counter: usize,
}

impl Scheduler {
    pub fn new(
        config: SchedulerConfig,
        users_api: UsersApiClient,
        forwarder: Arc<dyn Forwarder>,
    ) -> Self {
        Self {
            config,
            users_api,
            forwarder,
            counter: 0,
        }
    }

    /// Create the incoming and processed directories
    pub async fn ensure_directories(&self) -> SchedulerResult<()> {
        for dir in [self.config.incoming_dir(), self.config.processed_dir()] {
            fs::create_dir_all(&dir).await?;
        }
        Ok(())
    }

    /// One create/write/sweep pass. Failures are logged, never returned.
    pub async fn run_iteration(&mut self) {
        info!("Scheduler iteration started");

        let payload = pipeline::generate_user_data(self.counter);
        match self.users_api.create_user(&payload).await {
            Ok(user) => {
                info!("Created user ID={} Name={}", user.id, user.name);
                let incoming = self.config.incoming_dir();
                if let Err(e) = pipeline::write_user_to_file(&incoming, &user).await {
                    error!("Failed to write user to file: {}", e);
                }
            }
            Err(e) => error!("Error creating user: {}", e),
        }

        let incoming = self.config.incoming_dir();
        let processed = self.config.processed_dir();
        let forwarder = self.forwarder.as_ref();
        if let Err(e) = pipeline::process_files(&incoming, &processed, forwarder).await {
            error!("Failed to read incoming directory: {}", e);
        }

        self.counter += 1;
    }

    /// Run iterations until `shutdown` resolves
    pub async fn run(mut self, shutdown: impl Future<Output = ()>) {
        tokio::pin!(shutdown);

        loop {
            self.run_iteration().await;

            info!("Sleeping for {:?}", self.config.interval());
            tokio::select! {
                _ = tokio::time::sleep(self.config.interval()) => {}
                _ = &mut shutdown => {
                    info!("Scheduler stopping");
                    return;
                }
            }
        }
    }

    pub fn iterations(&self) -> usize {
        self.counter
    }
}
