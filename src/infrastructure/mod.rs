//! Infrastructure Layer
//!
//! Implementations backed by external libraries:
//! - Prometheus metrics registry and helpers

pub mod metrics;
