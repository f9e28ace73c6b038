use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use lands_types::errors::FeeError;
use serde_json::json;
use thiserror::Error;

/// Central error type for the Gateway application
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown exemption: {0}")]
    UnknownExemption(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<FeeError> for AppError {
    fn from(err: FeeError) -> Self {
        match err {
            FeeError::InvalidInput { .. }
            | FeeError::InvalidExemption { .. }
            | FeeError::UnknownTransactionType(_) => AppError::InvalidInput(err.to_string()),
            FeeError::UnknownExemption(id) => AppError::UnknownExemption(id),
            FeeError::InvalidReference(_) => AppError::BadRequest(err.to_string()),
            FeeError::ArithmeticOverflow(_) => AppError::Unprocessable(err.to_string()),
        }
    }
}

// Malformed bodies, wrong content types and mistyped fields all surface
// here before the handler runs.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected request body");
        AppError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, code) = match self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg, "INVALID_INPUT"),
            AppError::UnknownExemption(id) => (
                StatusCode::BAD_REQUEST,
                format!("Unknown exemption: {}", id),
                "UNKNOWN_EXEMPTION",
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, "BAD_REQUEST"),
            AppError::Unprocessable(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, msg, "UNPROCESSABLE")
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, "NOT_FOUND"),
        };

        let body = Json(json!({
            "error": code,
            "message": error_message
        }));

        (status, body).into_response()
    }
}
