//! Payloads exchanged with the users API

use serde::{Deserialize, Serialize};

/// Body sent to `POST /users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleUser {
    pub name: String,
    pub email: String,
}

/// User as returned by the users API
///
/// Missing fields decode to their zero values, so a partial file in the
/// incoming directory is still routed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}
