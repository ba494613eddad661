//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    http::header,
    middleware,
    response::IntoResponse,
    routing::get,
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::{create_catch_panic_layer, track_metrics};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Presence endpoint polled by the website
pub const PRESENCE_PATH: &str = "/api/v1/users";

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        // Presence tracking
        .route(
            PRESENCE_PATH,
            get(handlers::presence::get_online_users).post(handlers::presence::update_presence),
        )
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler));

    with_route_layers(router).with_state(state)
}

/// Wrap routes with panic recovery inside request metrics, so a recovered
/// panic is recorded with its 500 status. Applied after routing so the matched
/// path is available for labels.
pub fn with_route_layers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .route_layer(create_catch_panic_layer())
        .route_layer(middleware::from_fn(track_metrics))
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> Result<impl IntoResponse, AppError> {
    let metrics = metrics::gather_metrics()
        .map_err(|e| AppError::Internal(format!("Failed to encode metrics: {}", e)))?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        metrics,
    ))
}
