//! Sample data generation and the incoming/processed file pipeline

use std::path::Path;

use tokio::fs;
use tracing::{info, warn};

use crate::{
    client::Forwarder,
    error::SchedulerResult,
    models::{SampleUser, User},
};

const SAMPLE_NAMES: [&str; 5] = [
    "David Smith",
    "Alice Brown",
    "David Lee",
    "John Doe",
    "David De Gea",
];

/// Users whose name starts with this prefix are forwarded
pub const FORWARD_PREFIX: &str = "David";

/// Deterministic sample user for the given iteration
pub fn generate_user_data(counter: usize) -> SampleUser {
    let name = SAMPLE_NAMES[counter % SAMPLE_NAMES.len()];
    let email = format!("{}@example.com", name.replace(' ', ".").to_lowercase());

    SampleUser {
        name: name.to_string(),
        email,
    }
}

/// Write `user_<id>.json` into `dir`
pub async fn write_user_to_file(dir: &Path, user: &User) -> SchedulerResult<()> {
    let path = dir.join(format!("user_{}.json", user.id));
    let data = serde_json::to_vec_pretty(user)?;
    fs::write(path, data).await?;
    Ok(())
}

/// Move every regular file from `incoming` to `processed`, forwarding the
/// ones whose user name starts with [`FORWARD_PREFIX`].
///
/// Unreadable files stay where they are. Files with invalid JSON are moved
/// without being forwarded. Returns the number of files moved.
pub async fn process_files(
    incoming: &Path,
    processed: &Path,
    forwarder: &dyn Forwarder,
) -> SchedulerResult<usize> {
    let mut entries = fs::read_dir(incoming).await?;
    let mut moved = 0;

    while let Some(entry) = entries.next_entry().await? {
        let file_type = match entry.file_type().await {
            Ok(file_type) => file_type,
            Err(e) => {
                warn!("Failed to inspect {}: {}", entry.path().display(), e);
                continue;
            }
        };
        if !file_type.is_file() {
            continue;
        }

        let in_path = entry.path();
        let out_path = processed.join(entry.file_name());

        let data = match fs::read(&in_path).await {
            Ok(data) => data,
            Err(e) => {
                warn!("Failed to read file {}: {}", in_path.display(), e);
                continue;
            }
        };

        match serde_json::from_slice::<User>(&data) {
            Ok(user) if user.name.starts_with(FORWARD_PREFIX) => {
                info!("Forwarding user {} ({}) to processor", user.id, user.name);
                forwarder.forward(&data).await;
            }
            Ok(_) => {}
            Err(e) => warn!("Invalid JSON in file {}: {}", in_path.display(), e),
        }

        match fs::rename(&in_path, &out_path).await {
            Ok(()) => moved += 1,
            Err(e) => warn!("Failed to move file {}: {}", in_path.display(), e),
        }
    }

    Ok(moved)
}
