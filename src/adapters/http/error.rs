//! Shared HTTP error responses.
//!
//! Every failure answers with a JSON `{ code, message }` body. Validation
//! failures are 422s (the engine-level replacement for "disable the
//! button"), absent records are 404s that clients treat as a new session,
//! and storage failures that survive the fallback are 500s.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::AppError;
use crate::domain::team::TeamError;
use crate::ports::StorageError;

/// Standard error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new("UNAUTHORIZED", message)
    }
}

/// Maps an application error onto a status code and JSON body.
pub fn app_error_response(error: AppError) -> Response {
    let (status, code) = match &error {
        AppError::TeamNotFound(_) => (StatusCode::NOT_FOUND, "TEAM_NOT_FOUND"),
        AppError::SubmissionNotFound(_) => (StatusCode::NOT_FOUND, "SUBMISSION_NOT_FOUND"),
        AppError::Team(team_error) => match team_error {
            TeamError::UnknownPart { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "UNKNOWN_PART"),
            TeamError::UnknownOwnedItem { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "UNKNOWN_OWNED_ITEM")
            }
            TeamError::InvalidSellQuantity { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_SELL_QUANTITY")
            }
            TeamError::BudgetExceeded { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "BUDGET_EXCEEDED")
            }
            TeamError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_FAILED"),
        },
        AppError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_FAILED"),
        AppError::Storage(storage_error) => {
            tracing::error!(error = %storage_error, "Storage failure reached the HTTP layer");
            let code = match storage_error {
                StorageError::Timeout { .. } => "STORAGE_TIMEOUT",
                _ => "STORAGE_ERROR",
            };
            (StatusCode::INTERNAL_SERVER_ERROR, code)
        }
    };

    (status, Json(ErrorResponse::new(code, error.to_string()))).into_response()
}
