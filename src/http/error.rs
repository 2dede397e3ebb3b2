//! Mapping of domain failures to HTTP responses.
//!
//! Every failure leaves a handler as an `ApiError`; the status is chosen by
//! an exhaustive match and the body is always `{"message": ...}`. Internal
//! errors are logged and answered with a fixed message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::contacts::ContactError;
use crate::query::QueryError;

pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Contact(#[from] ContactError),

    #[error(transparent)]
    Query(#[from] QueryError),

    /// The request envelope (query string) could not be decoded.
    #[error("{0}")]
    BadRequest(String),

    /// Anything unclassified. The cause is logged, never sent.
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Contact(ContactError::Invalid(_)) => StatusCode::BAD_REQUEST,
            ApiError::Contact(ContactError::Duplicate) => StatusCode::BAD_REQUEST,
            ApiError::Contact(ContactError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Query(QueryError::InvalidEnum(_)) => StatusCode::BAD_REQUEST,
            ApiError::Query(QueryError::LimitExceeded) => StatusCode::BAD_REQUEST,
            ApiError::Query(QueryError::OutOfRange) => StatusCode::RANGE_NOT_SATISFIABLE,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message surfaced to the client.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let ApiError::Internal(cause) = &self {
            tracing::error!(cause = %cause, "Request failed with internal error");
        } else {
            tracing::debug!(status = %status, error = %self, "Request rejected");
        }

        let body = ErrorBody {
            message: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ApiError::from(ContactError::Invalid("x".into())), StatusCode::BAD_REQUEST),
            (ApiError::from(ContactError::Duplicate), StatusCode::BAD_REQUEST),
            (ApiError::from(ContactError::NotFound), StatusCode::NOT_FOUND),
            (
                ApiError::from(QueryError::InvalidEnum("Invalid sort field".into())),
                StatusCode::BAD_REQUEST,
            ),
            (ApiError::from(QueryError::LimitExceeded), StatusCode::BAD_REQUEST),
            (ApiError::from(QueryError::OutOfRange), StatusCode::RANGE_NOT_SATISFIABLE),
            (ApiError::Internal("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, status) in cases {
            assert_eq!(error.status_code(), status, "{error:?}");
        }
    }

    #[test]
    fn test_messages_surface_verbatim() {
        let error = ApiError::from(QueryError::InvalidEnum("Invalid sort field".into()));
        assert_eq!(error.public_message(), "Invalid sort field");

        let error = ApiError::from(ContactError::NotFound);
        assert_eq!(error.public_message(), "Contact not found");
    }

    #[test]
    fn test_internal_cause_is_hidden() {
        let error = ApiError::Internal("store lock poisoned".into());
        assert_eq!(error.public_message(), INTERNAL_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let response = ApiError::from(ContactError::Duplicate).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"message": "A contact with this email already exists"})
        );
    }
}
