//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. All route handlers should return `Result<T, AppError>`.
//!
//! Every error is terminal for its request and is reported as
//! `500 {"error": "<message>"}`, where the message is the underlying error
//! text. There are no partial-success responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use postal_lookup_core::ErrorResponse;

use crate::db::RepositoryError;
use crate::geocoding::GeocodeError;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Access log operation failed.
    #[error(transparent)]
    Database(#[from] RepositoryError),

    /// Geocoding API lookup failed.
    #[error(transparent)]
    Geocoding(#[from] GeocodeError),
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Database(_) | Self::Geocoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let event_id = sentry::capture_error(&self);
        tracing::error!(
            error = %self,
            sentry_event_id = %event_id,
            "Request error"
        );

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use http_body_util::BodyExt;

    use super::*;

    fn parse_error() -> AppError {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        AppError::Geocoding(GeocodeError::Parse(err))
    }

    #[test]
    fn test_app_error_display_is_inner_message() {
        let err = AppError::Database(RepositoryError::Database(sqlx::Error::PoolTimedOut));
        assert!(err.to_string().starts_with("database error: pool timed out"));
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(parse_error().status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            AppError::Database(RepositoryError::Database(sqlx::Error::PoolClosed)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_app_error_json_body() {
        let err = parse_error();
        let expected = err.to_string();

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.error, expected);
        assert!(body.error.starts_with("JSON parse error: "));
    }
}
