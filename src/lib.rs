//! # Presence Server Library
//!
//! Backend for the client download website. It exposes a single presence
//! endpoint that counts online users and sessions, held entirely in process
//! memory:
//! - `POST /api/v1/users` applies join, heartbeat, or leave for a session
//! - `GET /api/v1/users` reports distinct online users and total sessions
//!
//! Sessions that stop sending heartbeats are evicted lazily, on the next
//! request, once they have been idle longer than the configured timeout.
//!
//! ## Module Structure
//!
//! ```text
//! presence_server/
//! +-- config/         Configuration management
//! +-- domain/         Presence entities and the tracker
//! +-- application/    Presence service and DTOs
//! +-- infrastructure/ Prometheus metrics
//! +-- presentation/   HTTP routes, handlers, and middleware
//! +-- shared/         Common utilities (errors, clock)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
