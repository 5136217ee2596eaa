//! Failure classification.
//!
//! Maps [`ResolveError`] onto a small, stable set of outcomes with an HTTP
//! status and a message that never leaks raw upstream payloads.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use sources::ProviderError;
use thiserror::Error;

use crate::error::ResolveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Title search matched nothing
    NotFound,
    /// Upstream rejected our credentials
    Unauthorized,
    /// Upstream reports the requested resource as absent
    UpstreamNotFound,
    /// Any other upstream failure status
    UpstreamError,
    /// Request sent, no response (refused, reset, timed out)
    Unreachable,
    /// Anything else
    Internal,
}

/// A classified failure, ready to be sent to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind:?} ({status}): {message}")]
pub struct ClassifiedFailure {
    pub kind: FailureKind,
    pub status: u16,
    pub message: String,
}

impl ClassifiedFailure {
    fn new(kind: FailureKind, status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            kind,
            status: status.as_u16(),
            message: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self::new(
            FailureKind::Internal,
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error.",
        )
    }
}

/// Classify a resolution error.
pub fn classify(error: &ResolveError) -> ClassifiedFailure {
    match error {
        ResolveError::NoMatches(_) => ClassifiedFailure::new(
            FailureKind::NotFound,
            StatusCode::NOT_FOUND,
            "No matches found.",
        ),
        ResolveError::Provider(e) => classify_provider(e),
        ResolveError::Score(_) => ClassifiedFailure::internal(),
    }
}

fn classify_provider(error: &ProviderError) -> ClassifiedFailure {
    match error {
        ProviderError::Api { status: 401, .. } => ClassifiedFailure::new(
            FailureKind::Unauthorized,
            StatusCode::UNAUTHORIZED,
            "API Key unauthorized or invalid.",
        ),
        ProviderError::Api { status: 404, .. } => ClassifiedFailure::new(
            FailureKind::UpstreamNotFound,
            StatusCode::NOT_FOUND,
            "Requested movie details not found.",
        ),
        ProviderError::Api { status, message } => ClassifiedFailure {
            kind: FailureKind::UpstreamError,
            status: *status,
            message: message
                .clone()
                .unwrap_or_else(|| "External API communication error.".to_string()),
        },
        e if e.is_unreachable() => ClassifiedFailure::new(
            FailureKind::Unreachable,
            StatusCode::SERVICE_UNAVAILABLE,
            "Service unavailable: External API not responding.",
        ),
        _ => ClassifiedFailure::internal(),
    }
}

impl IntoResponse for ClassifiedFailure {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(json!({ "error": self.message }))).into_response()
    }
}
