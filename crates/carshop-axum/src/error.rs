//! Axum-specific error types and mappings.
//!
//! Maps `CoreError` and its sources onto HTTP status codes and a JSON body
//! of the form `{"error": "...", "status": 400}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use carshop_core::{CoreError, DecodeError, RepositoryError};
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Bad request (malformed body, wrong types, bad path id).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Rejected request");
                (StatusCode::BAD_REQUEST, msg)
            }
            HttpError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Decode(decode_err) => decode_err.into(),
            CoreError::Repository(repo_err) => repo_err.into(),
            CoreError::Validation(msg) => HttpError::BadRequest(msg),
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Statement(msg) => HttpError::Internal(format!("Statement: {msg}")),
            RepositoryError::RowMapping(msg) => {
                HttpError::Internal(format!("Row mapping: {msg}"))
            }
            RepositoryError::Constraint(msg) => HttpError::BadRequest(msg),
        }
    }
}

impl From<DecodeError> for HttpError {
    fn from(err: DecodeError) -> Self {
        HttpError::BadRequest(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                HttpError::from(CoreError::Decode(DecodeError::MissingId)),
                StatusCode::BAD_REQUEST,
            ),
            (
                HttpError::from(RepositoryError::Constraint("NOT NULL".to_string())),
                StatusCode::BAD_REQUEST,
            ),
            (
                HttpError::from(RepositoryError::Statement("no such table".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                HttpError::from(RepositoryError::RowMapping("index out of bounds".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                HttpError::from(CoreError::Validation("empty".to_string())),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
