//! Error types for the calculator web server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use estimate_core::{EstimationError, PersistenceError};
use thiserror::Error;

use crate::validation::ValidationError;

/// Errors that can occur while handling a request.
#[derive(Debug, Error)]
pub enum WebError {
    /// The calculation was rejected or could not be estimated.
    #[error(transparent)]
    Estimation(#[from] EstimationError),

    /// Calculation history could not be read or written.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] database::DatabaseError),

    /// A submitted form field was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl WebError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::Estimation(err) if err.is_validation() => StatusCode::BAD_REQUEST,
            WebError::Estimation(_) => StatusCode::SERVICE_UNAVAILABLE,
            WebError::Persistence(PersistenceError::AuthRequired) => StatusCode::UNAUTHORIZED,
            WebError::Persistence(PersistenceError::StoreUnavailable(_)) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            WebError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            WebError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = %status, "Request failed: {}", self);
        } else {
            tracing::debug!(status = %status, "Request rejected: {}", self);
        }

        let body = serde_json::json!({
            "error": self.to_string()
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for handlers.
pub type Result<T> = std::result::Result<T, WebError>;
