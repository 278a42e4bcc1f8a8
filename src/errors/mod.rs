//! Error handling module for the timetable backend.
//!
//! Maps store failures and missing records to HTTP status codes and the free-text
//! JSON bodies the frontend expects.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found, reported as `{ "message": ... }`
    NotFound(String),
    /// Store failure, reported as `{ "error": ... }`
    Database(String),
    /// Failed write on a singleton document, reported as `{ "message": ..., "error": ... }`
    Write { message: String, error: String },
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Write { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Attach a caller-facing message to a store failure.
    pub fn context(self, message: &str) -> Self {
        match self {
            AppError::Database(error) => AppError::Write {
                message: message.to_string(),
                error,
            },
            other => other,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {:?}", err);
        AppError::Database(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        AppError::Database(format!("JSON error: {}", err))
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        match err {
            AppError::NotFound(msg) => Self {
                message: Some(msg.clone()),
                error: None,
            },
            AppError::Database(msg) => Self {
                message: None,
                error: Some(msg.clone()),
            },
            AppError::Write { message, error } => Self {
                message: Some(message.clone()),
                error: Some(error.clone()),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse::from(&self);
        (status, Json(body)).into_response()
    }
}
