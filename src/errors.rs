//! Centralized error handling.
//!
//! Provides a unified error type for the entire application. Every
//! failure is converted into the response envelope at the handler
//! boundary; nothing propagates unhandled to the transport layer.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::config::{MSG_STORE_CREATE_FAILED, MSG_UNEXPECTED_FAILURE, MSG_USER_EXISTS};
use crate::types::{ApiResponse, ErrorDetail};

/// Application error types.
///
/// A closed set of variants replaces the open-ended error list: each
/// failure mode the sign-up flow can hit has its own variant with a
/// fixed status code and user-facing message.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request failed validation (malformed body, missing field)
    #[error("{0}")]
    Validation(String),

    /// The submitted email is already registered
    #[error("User already exists. Please login.")]
    DuplicateEmail,

    /// The store accepted the insert but returned no record
    #[error("User record was not created")]
    StoreCreateFailed,

    /// Database driver or connectivity failure
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    /// Anything else that should never reach the caller verbatim
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code
    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::DuplicateEmail => StatusCode::BAD_REQUEST,
            AppError::StoreCreateFailed | AppError::Database(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Validation(msg) => msg.clone(),
            AppError::DuplicateEmail => MSG_USER_EXISTS.to_string(),
            AppError::StoreCreateFailed => MSG_STORE_CREATE_FAILED.to_string(),

            // Hide details for internal errors
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                MSG_UNEXPECTED_FAILURE.to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                MSG_UNEXPECTED_FAILURE.to_string()
            }
        }
    }

    /// Structured error detail for the envelope's `errors` list
    fn detail(&self) -> ErrorDetail {
        match self {
            AppError::Validation(msg) => ErrorDetail::Validation { detail: msg.clone() },
            AppError::DuplicateEmail => ErrorDetail::Conflict {
                resource: "user".to_string(),
            },
            AppError::StoreCreateFailed => ErrorDetail::StoreFailure,
            AppError::Database(_) | AppError::Internal(_) => ErrorDetail::Unexpected,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ApiResponse::<()>::failure(status, self.user_message(), vec![self.detail()]);

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
