use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use mergington_core::RosterError;
use mergington_db::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`StoreError`] for store outcomes and implements [`IntoResponse`]
/// to produce consistent JSON error responses. The roster variants are
/// matched exhaustively; adding one to the domain enum breaks this match on
/// purpose.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A store outcome: roster condition or database failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Store(StoreError::Roster(roster)) => match roster {
                RosterError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", "Activity not found")
                }
                RosterError::AlreadySignedUp { .. } => (
                    StatusCode::BAD_REQUEST,
                    "ALREADY_SIGNED_UP",
                    "Student is already signed up",
                ),
                RosterError::Full { .. } => {
                    (StatusCode::BAD_REQUEST, "ACTIVITY_FULL", "Activity is full")
                }
                RosterError::NotSignedUp { .. } => (
                    StatusCode::BAD_REQUEST,
                    "NOT_SIGNED_UP",
                    "Student is not signed up for this activity",
                ),
            },

            // Storage failures are infrastructure, not caller conditions:
            // log the detail, return a sanitized 500.
            AppError::Store(StoreError::Database(err)) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred",
                )
            }

            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred",
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
