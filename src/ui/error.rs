//! Error responses for the page handlers.
//!
//! Two buckets: unparseable numeric input answers 400 with a short
//! plain-text message, and any database failure answers an opaque 500.
//! Auth failures and missing sessions are not errors here; the handlers
//! answer those with a re-rendered page or a redirect.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl UiError {
    /// Validation error (400) for unparseable numeric input
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            UiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            UiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for UiError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {}", err);
        UiError::Database(err)
    }
}

impl IntoResponse for UiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            UiError::BadRequest(message) => message,
            // Opaque on the wire; the detail went to the log above.
            UiError::Database(_) => "A database error occurred".to_string(),
        };

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_maps_to_400() {
        let err = UiError::bad_request("Invalid price");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Invalid price");
    }

    #[test]
    fn database_errors_map_to_500() {
        let err = UiError::Database(sqlx::Error::RowNotFound);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn database_response_body_is_opaque() {
        let response = UiError::Database(sqlx::Error::RowNotFound).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
