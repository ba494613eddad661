//! Presence entities.
//!
//! A presence record ties one client session to the account that owns it and
//! remembers when that session was last heard from.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Errors raised when a presence update cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PresenceError {
    #[error("userId and sessionId are required")]
    MissingIdentifier,

    #[error("Invalid action. Use: join, heartbeat, or leave")]
    InvalidAction(String),
}

/// Lifecycle event reported by a client session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceAction {
    Join,
    Heartbeat,
    Leave,
}

impl PresenceAction {
    /// Wire representation of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Join => "join",
            Self::Heartbeat => "heartbeat",
            Self::Leave => "leave",
        }
    }

    /// Parse an optional wire value.
    ///
    /// An absent or empty action is a keep-alive and maps to `Heartbeat`.
    /// Anything else must name one of the known actions exactly.
    pub fn from_optional(value: Option<&str>) -> Result<Self, PresenceError> {
        match value {
            None | Some("") => Ok(Self::Heartbeat),
            Some(s) => s.parse(),
        }
    }
}

impl FromStr for PresenceAction {
    type Err = PresenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "join" => Ok(Self::Join),
            "heartbeat" => Ok(Self::Heartbeat),
            "leave" => Ok(Self::Leave),
            other => Err(PresenceError::InvalidAction(other.to_string())),
        }
    }
}

impl fmt::Display for PresenceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One present client session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    /// Account that owns the session; several sessions may share it
    pub user_id: String,

    /// Most recent join or heartbeat
    pub last_seen: DateTime<Utc>,
}

impl SessionRecord {
    pub fn new(user_id: impl Into<String>, last_seen: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.into(),
            last_seen,
        }
    }

    /// Refresh the record. `last_seen` never moves backwards.
    pub fn touch(&mut self, user_id: &str, now: DateTime<Utc>) {
        if self.user_id != user_id {
            self.user_id = user_id.to_string();
        }
        if now > self.last_seen {
            self.last_seen = now;
        }
    }

    /// Whether the record was last seen strictly before `cutoff`.
    pub fn is_idle(&self, cutoff: DateTime<Utc>) -> bool {
        self.last_seen < cutoff
    }
}

/// Point-in-time presence counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceSnapshot {
    /// Distinct accounts with at least one present session
    pub online_users: usize,

    /// Present sessions
    pub total_sessions: usize,
}
