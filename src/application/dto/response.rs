//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::application::services::PresenceUpdate;
use crate::domain::PresenceSnapshot;

/// Response to an accepted presence update
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceUpdateResponse {
    pub success: bool,
    pub online_users: usize,
    pub total_sessions: usize,
    pub action: String,
}

impl From<PresenceUpdate> for PresenceUpdateResponse {
    fn from(update: PresenceUpdate) -> Self {
        Self {
            success: true,
            online_users: update.snapshot.online_users,
            total_sessions: update.snapshot.total_sessions,
            action: update.action.as_str().to_string(),
        }
    }
}

/// Current online counts
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnlineUsersResponse {
    pub online_users: usize,
    pub total_sessions: usize,
}

impl From<PresenceSnapshot> for OnlineUsersResponse {
    fn from(snapshot: PresenceSnapshot) -> Self {
        Self {
            online_users: snapshot.online_users,
            total_sessions: snapshot.total_sessions,
        }
    }
}
