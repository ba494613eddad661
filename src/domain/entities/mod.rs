//! # Domain Entities
//!
//! - **SessionRecord**: One present client session and the account that owns it
//! - **PresenceAction**: Lifecycle event reported by a session (join, heartbeat, leave)
//! - **PresenceSnapshot**: Distinct-user and session counts at a point in time

mod presence;

pub use presence::{PresenceAction, PresenceError, PresenceSnapshot, SessionRecord};
