//! Custom error types and handling
//!
//! This module defines the application's error types and implements
//! conversion to HTTP responses for the Axum framework.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mongodb::error::{ErrorKind, WriteFailure};
use serde::Serialize;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Client-correctable input, e.g. an identifier the store cannot parse.
    #[error("{0}")]
    InvalidInput(String),

    /// A direct lookup found no record.
    #[error("{0}")]
    NotFound(String),

    /// A store operation failed. The message is the fixed, operation-specific
    /// text exposed to clients; the real error is logged server-side only.
    #[error("{message}")]
    Database {
        message: &'static str,
        #[source]
        source: mongodb::error::Error,
    },

    #[error("An internal error occurred")]
    Internal(#[from] anyhow::Error),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl AppError {
    /// Attach an operation-specific message to a store error
    pub fn database(message: &'static str, source: mongodb::error::Error) -> Self {
        Self::Database { message, source }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database { .. } | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log internal errors but don't expose details to clients
        match &self {
            AppError::Database { message, source } => {
                tracing::error!(error = %source, "{message}");
            }
            AppError::Internal(source) => {
                tracing::error!(error = ?source, "Internal error");
            }
            _ => {}
        }

        let body = ErrorResponse {
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Whether a store error is a unique-index violation (code 11000).
///
/// Inserting a user whose email already exists surfaces this way; it is the
/// "already exists" signal for registration.
pub fn is_duplicate_key_error(err: &mongodb::error::Error) -> bool {
    matches!(
        *err.kind,
        ErrorKind::Write(WriteFailure::WriteError(ref write_err)) if write_err.code == 11000
    )
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_distinguish_error_kinds() {
        assert_eq!(
            AppError::InvalidInput("Invalid contest id".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("Contest not found".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Internal(anyhow::anyhow!("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn message_renders_without_an_error_code() {
        let err = AppError::NotFound("User not found".to_string());
        assert_eq!(err.to_string(), "User not found");
    }
}
