//! Health Check Handlers
//!
//! Provides health check endpoints for Kubernetes-style liveness and readiness checks.
//!
//! # Endpoints
//! - `GET /health` - Basic health check
//! - `GET /health/live` - Liveness check (is the server running?)
//! - `GET /health/ready` - Readiness check (is the presence tracker responsive?)

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::time::{Duration, Instant};

use crate::application::services::PresenceService;
use crate::startup::AppState;

/// Server start time for uptime calculation
static SERVER_START: Lazy<Instant> = Lazy::new(Instant::now);
static SERVER_START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Lock wait above which the tracker is reported as degraded
const PRESENCE_DEGRADED_AFTER: Duration = Duration::from_millis(50);

/// Initialize the server start time (call during startup)
pub fn init_server_start() {
    Lazy::force(&SERVER_START);
    Lazy::force(&SERVER_START_TIME);
}

/// Basic health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Detailed health check response
#[derive(Debug, Serialize)]
pub struct DetailedHealthResponse {
    pub status: HealthStatus,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub started_at: String,
    pub checks: HealthChecks,
}

/// Individual component health checks
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub presence: PresenceHealth,
}

/// Presence tracker health
#[derive(Debug, Serialize)]
pub struct PresenceHealth {
    pub status: HealthStatus,
    pub latency_ms: u64,
    pub online_users: usize,
    pub total_sessions: usize,
}

/// Overall health status
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Simple liveness response
#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    pub status: &'static str,
}

/// Basic health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Liveness check - confirms the server is running
pub async fn liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse { status: "alive" })
}

/// Readiness check - confirms that the presence tracker answers promptly
pub async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    let uptime = SERVER_START.elapsed().as_secs();
    let started_at = SERVER_START_TIME.to_rfc3339();

    let presence = check_presence(&state.presence);

    let response = DetailedHealthResponse {
        status: presence.status,
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: uptime,
        started_at,
        checks: HealthChecks { presence },
    };

    let status_code = match response.status {
        HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response))
}

/// Take a snapshot and time how long the tracker lock took
fn check_presence(presence: &PresenceService) -> PresenceHealth {
    let start = Instant::now();
    let snapshot = presence.online();
    let latency = start.elapsed();

    PresenceHealth {
        status: status_for_latency(latency),
        latency_ms: latency.as_millis() as u64,
        online_users: snapshot.online_users,
        total_sessions: snapshot.total_sessions,
    }
}

fn status_for_latency(latency: Duration) -> HealthStatus {
    if latency < PRESENCE_DEGRADED_AFTER {
        HealthStatus::Healthy
    } else {
        HealthStatus::Degraded
    }
}
