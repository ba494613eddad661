//! # Domain Layer
//!
//! Presence rules, independent of HTTP, configuration, or metrics.
//!
//! ## Structure
//!
//! - **entities**: Session records, presence actions, snapshots, and errors
//! - **services**: The presence tracker that applies lifecycle events and idle eviction
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Time is passed in explicitly, never read from the wall clock

pub mod entities;
pub mod services;

// Re-export commonly used types
pub use entities::*;
pub use services::*;
