//! Session presence tracking.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::{PresenceAction, PresenceError, PresenceSnapshot, SessionRecord};

/// In-memory map of present sessions keyed by session id.
///
/// The tracker is a plain owned structure with no interior locking; callers
/// that share it between threads wrap the whole evict-then-act sequence in a
/// single lock (see `PresenceService`).
#[derive(Debug, Default)]
pub struct PresenceTracker {
    sessions: HashMap<String, SessionRecord>,
}

impl PresenceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a lifecycle event for one session.
    ///
    /// `join` and `heartbeat` upsert the record, `leave` removes it if present.
    /// Both identifiers must be non-empty; otherwise nothing changes.
    pub fn apply(
        &mut self,
        session_id: &str,
        user_id: &str,
        action: PresenceAction,
        now: DateTime<Utc>,
    ) -> Result<(), PresenceError> {
        if session_id.is_empty() || user_id.is_empty() {
            return Err(PresenceError::MissingIdentifier);
        }

        match action {
            PresenceAction::Join | PresenceAction::Heartbeat => {
                self.sessions
                    .entry(session_id.to_string())
                    .and_modify(|record| record.touch(user_id, now))
                    .or_insert_with(|| SessionRecord::new(user_id, now));
            }
            PresenceAction::Leave => {
                self.sessions.remove(session_id);
            }
        }

        Ok(())
    }

    /// Drop every session last seen strictly before `now - idle_threshold`.
    ///
    /// Returns the number of sessions removed.
    pub fn evict_idle(&mut self, now: DateTime<Utc>, idle_threshold: Duration) -> usize {
        let Some(cutoff) = now.checked_sub_signed(idle_threshold) else {
            return 0;
        };
        let before = self.sessions.len();
        self.sessions.retain(|_, record| !record.is_idle(cutoff));
        before - self.sessions.len()
    }

    /// Distinct-user and total-session counts.
    pub fn snapshot(&self) -> PresenceSnapshot {
        let users: HashSet<&str> = self
            .sessions
            .values()
            .map(|record| record.user_id.as_str())
            .collect();

        PresenceSnapshot {
            online_users: users.len(),
            total_sessions: self.sessions.len(),
        }
    }

    /// Look up a present session.
    pub fn get(&self, session_id: &str) -> Option<&SessionRecord> {
        self.sessions.get(session_id)
    }

    pub fn contains(&self, session_id: &str) -> bool {
        self.sessions.contains_key(session_id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
