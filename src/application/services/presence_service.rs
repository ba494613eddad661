//! Presence Service
//!
//! Shares one `PresenceTracker` between request handlers. Every public
//! operation runs its idle-eviction pass and its mutation or read under the
//! same lock, so counts never include idle sessions and concurrent updates to
//! one session cannot interleave.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::domain::{PresenceAction, PresenceError, PresenceSnapshot, PresenceTracker};
use crate::infrastructure::metrics;
use crate::shared::clock::{Clock, SystemClock};

/// Default idle threshold (5 minutes)
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Result of an applied presence update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenceUpdate {
    pub action: PresenceAction,
    pub snapshot: PresenceSnapshot,
}

/// Process-wide presence state with lazy idle eviction
pub struct PresenceService {
    tracker: Mutex<PresenceTracker>,
    clock: Arc<dyn Clock>,
    idle_timeout: chrono::Duration,
}

impl PresenceService {
    /// Create a service reading the wall clock
    pub fn new(idle_timeout: Duration) -> Self {
        Self::with_clock(idle_timeout, Arc::new(SystemClock))
    }

    /// Create a service with an injected clock
    pub fn with_clock(idle_timeout: Duration, clock: Arc<dyn Clock>) -> Self {
        let idle_timeout =
            chrono::Duration::from_std(idle_timeout).unwrap_or(chrono::Duration::MAX);
        Self {
            tracker: Mutex::new(PresenceTracker::new()),
            clock,
            idle_timeout,
        }
    }

    /// Configured idle threshold
    pub fn idle_timeout(&self) -> chrono::Duration {
        self.idle_timeout
    }

    /// Apply a join/heartbeat/leave for a session and return the new counts.
    ///
    /// Identifiers and action are validated before the tracker is touched, so
    /// rejected input neither mutates state nor triggers eviction.
    pub fn record(
        &self,
        session_id: &str,
        user_id: &str,
        action: Option<&str>,
    ) -> Result<PresenceUpdate, PresenceError> {
        if session_id.is_empty() || user_id.is_empty() {
            return Err(PresenceError::MissingIdentifier);
        }
        let action = PresenceAction::from_optional(action)?;

        let snapshot = {
            let mut tracker = self.tracker.lock();
            let now = self.clock.now();
            self.evict(&mut tracker, now);
            tracker.apply(session_id, user_id, action, now)?;
            Self::publish(tracker.snapshot())
        };

        metrics::record_presence_action(action.as_str());

        match action {
            PresenceAction::Join => {
                tracing::debug!(session_id, user_id, "Session joined");
            }
            PresenceAction::Leave => {
                tracing::debug!(session_id, user_id, "Session left");
            }
            PresenceAction::Heartbeat => {
                tracing::trace!(session_id, user_id, "Session heartbeat");
            }
        }

        Ok(PresenceUpdate { action, snapshot })
    }

    /// Current counts after dropping idle sessions
    pub fn online(&self) -> PresenceSnapshot {
        let mut tracker = self.tracker.lock();
        let now = self.clock.now();
        self.evict(&mut tracker, now);
        Self::publish(tracker.snapshot())
    }

    /// Update the presence gauges. Called with the tracker lock held so
    /// concurrent requests cannot publish their counts out of order.
    fn publish(snapshot: PresenceSnapshot) -> PresenceSnapshot {
        metrics::set_presence_counts(snapshot.online_users, snapshot.total_sessions);
        snapshot
    }

    fn evict(&self, tracker: &mut PresenceTracker, now: chrono::DateTime<chrono::Utc>) {
        let evicted = tracker.evict_idle(now, self.idle_timeout);
        if evicted > 0 {
            tracing::debug!(evicted, "Evicted idle sessions");
            metrics::record_evictions(evicted);
        }
    }
}

impl Default for PresenceService {
    fn default() -> Self {
        Self::new(DEFAULT_IDLE_TIMEOUT)
    }
}
