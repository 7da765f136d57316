//! HTTP error response mapping.

use std::any::Any;

use axum::Json;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use blescan_domain::error::BlescanError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorBody { error })).into_response()
}

/// Maps [`BlescanError`] and body extraction failures to a JSON error
/// response with the appropriate status code.
pub enum ApiError {
    Domain(BlescanError),
    Body(BytesRejection),
}

impl From<BlescanError> for ApiError {
    fn from(err: BlescanError) -> Self {
        Self::Domain(err)
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        Self::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Body(rejection) => {
                tracing::warn!(error = %rejection, "failed to read request body");
                error_response(rejection.status(), rejection.body_text())
            }
            Self::Domain(BlescanError::Validation(err)) => {
                tracing::debug!(error = %err, "rejected payload");
                error_response(StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(BlescanError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        }
    }
}

/// Turn a caught handler panic into a `500` JSON error carrying the panic
/// message.
#[allow(clippy::needless_pass_by_value)]
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!(error = %message, "handler panicked");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, message)
}
