//! # Domain Services
//!
//! - **PresenceTracker**: Join/heartbeat/leave transitions, idle eviction, and counting

mod presence_tracker;

pub use presence_tracker::*;
