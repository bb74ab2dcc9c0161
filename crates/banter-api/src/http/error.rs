//! Application error type mapping to HTTP status codes and envelope format.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use banter_types::error::{LogError, SessionError};

use crate::http::response::ApiResponse;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Session-level failures (assignment, transport, log).
    Session(SessionError),
    /// Chat log read failures.
    Log(LogError),
    NotFound(String),
    Validation(String),
}

impl From<SessionError> for AppError {
    fn from(e: SessionError) -> Self {
        AppError::Session(e)
    }
}

impl From<LogError> for AppError {
    fn from(e: LogError) -> Self {
        AppError::Log(e)
    }
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Session(e @ SessionError::NotEnoughAccounts(_)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string())
            }
            AppError::Session(e @ SessionError::NotRunning) => {
                (StatusCode::CONFLICT, "SESSION_STOPPED", e.to_string())
            }
            AppError::Session(e) => (StatusCode::BAD_GATEWAY, "SESSION_ERROR", e.to_string()),
            AppError::Log(e) => (StatusCode::INTERNAL_SERVER_ERROR, "LOG_ERROR", e.to_string()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        if status.is_server_error() {
            tracing::warn!(code, %message, "Request failed");
        }
        (status, Json(ApiResponse::error(code, message))).into_response()
    }
}
