//! Panic Recovery
//!
//! Converts a panicking handler into the generic 500 response instead of
//! dropping the connection.

use std::any::Any;

use axum::{
    body::Body,
    http::Response,
    response::IntoResponse,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::shared::error::AppError;

type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response<Body>;

/// Create the panic-catching layer
pub fn create_catch_panic_layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(handle_panic as PanicHandler)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::Internal(format!("Handler panicked: {}", detail)).into_response()
}
