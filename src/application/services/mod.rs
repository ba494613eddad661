//! Application Services
//!
//! ## Available Services
//!
//! - **PresenceService**: Lock-guarded presence tracking with lazy idle eviction

pub mod presence_service;

// Re-export presence service types
pub use presence_service::{PresenceService, PresenceUpdate, DEFAULT_IDLE_TIMEOUT};
