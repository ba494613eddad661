//! Application Layer
//!
//! Services that own shared state and the DTOs exchanged with HTTP clients.
//! This layer sits between the presentation and domain layers.

pub mod services;
pub mod dto;
