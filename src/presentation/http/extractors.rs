//! Custom Extractors
//!
//! Axum extractors for request parsing.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::shared::error::AppError;

/// Message returned when a body cannot be parsed as the expected JSON shape
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// JSON body extractor that rejects with the API's `{error}` shape.
///
/// The Content-Type header is not checked: browsers sending beacons on page
/// unload post JSON as `text/plain`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(reason = %rejection.body_text(), "Failed to read request body");
            AppError::BadRequest(INVALID_BODY_MESSAGE.into())
        })?;

        let value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!(error = %e, "Rejected request body");
            AppError::BadRequest(INVALID_BODY_MESSAGE.into())
        })?;

        Ok(Self(value))
    }
}
