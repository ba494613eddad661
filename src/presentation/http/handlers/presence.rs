//! Presence Handlers
//!
//! # Endpoints
//! - `POST /api/v1/users` - Apply a join, heartbeat, or leave for a session
//! - `GET /api/v1/users` - Current online user and session counts

use axum::{extract::State, Json};

use crate::application::dto::request::PresenceRequest;
use crate::application::dto::response::{OnlineUsersResponse, PresenceUpdateResponse};
use crate::presentation::http::extractors::JsonBody;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Record a presence event
pub async fn update_presence(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<PresenceRequest>,
) -> Result<Json<PresenceUpdateResponse>, AppError> {
    let update = state
        .presence
        .record(&body.session_id(), &body.user_id(), body.action().as_deref())
        .map_err(|e| {
            tracing::debug!(error = %e, action = ?body.action(), "Rejected presence update");
            AppError::from(e)
        })?;

    Ok(Json(update.into()))
}

/// Get online counts
pub async fn get_online_users(State(state): State<AppState>) -> Json<OnlineUsersResponse> {
    Json(state.presence.online().into())
}
