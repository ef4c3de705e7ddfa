//! Error types for Bookshelf server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
///
/// `status` is `"fail"` for client and lookup errors, `"error"` for
/// internal failures.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, discriminator, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "fail", msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "fail", msg),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "error", msg)
            }
        };

        let body = Json(ErrorResponse {
            status: discriminator.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
