//! Helper types and traits for cleaner route handlers.
//!
//! Every route failure goes through [`ApiError`], which logs the full error
//! and renders only the caller-safe envelope as `{"error": "..."}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use doc_translator_core::Error;
use serde::Serialize;
use tracing::{error, warn};

/// Standard result type for route handlers.
pub type RouteResult<T> = Result<T, ApiError>;

/// A pipeline error on its way out to the caller.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let envelope = self.0.envelope();
        let status = StatusCode::from_u16(envelope.http_status)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(kind = ?envelope.kind, status = status.as_u16(), "Request failed: {}", self.0);
        } else {
            warn!(kind = ?envelope.kind, status = status.as_u16(), "Request rejected: {}", self.0);
        }

        (
            status,
            Json(ErrorBody {
                error: envelope.message,
            }),
        )
            .into_response()
    }
}

/// Extension trait for turning absent form fields into validation errors.
pub trait OptionExt<T> {
    /// Returns the contained value or a missing-field error.
    fn or_missing(self, field: &'static str) -> RouteResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn or_missing(self, field: &'static str) -> RouteResult<T> {
        self.ok_or_else(|| ApiError(Error::MissingField(field)))
    }
}

/// Extension trait for converting request-reading errors.
pub trait ResultExt<T, E: std::fmt::Display> {
    /// Converts the error to a malformed-request validation error.
    fn or_malformed(self) -> RouteResult<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T, E> for Result<T, E> {
    fn or_malformed(self) -> RouteResult<T> {
        self.map_err(|e| ApiError(Error::MalformedRequest(e.to_string())))
    }
}
