//! Request extraction.
//!
//! # Responsibilities
//! - Generate unique request ID (UUID v4)
//! - Decode contact bodies into drafts with JSON error responses
//! - Parse path identifiers and filter headers
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - Any body read or decode failure is an invalid contact
//! - A malformed identifier matches no contact

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, HeaderValue},
};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::contacts::{ContactDraft, ContactError, ContactId};
use crate::http::error::ApiError;
use crate::query::filter::{FilterTriple, X_FILTER_BY, X_FILTER_OPERATOR, X_FILTER_VALUE};

pub const X_REQUEST_ID: &str = "x-request-id";

/// Generates a UUID v4 request id for requests that arrive without one.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Contact body of a POST or PUT.
#[derive(Debug)]
pub struct ContactPayload(pub ContactDraft);

impl<S> FromRequest<S> for ContactPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ContactError::Invalid(rejection.body_text()))?;
        let draft =
            serde_json::from_slice(&bytes).map_err(|e| ContactError::Invalid(e.to_string()))?;
        Ok(Self(draft))
    }
}

/// Parse a path identifier. Anything but a non-negative integer is `None`.
pub fn parse_id(raw: &str) -> Option<ContactId> {
    raw.parse().ok()
}

/// Read the `X-Filter-*` headers.
pub fn filter_from_headers(headers: &HeaderMap) -> FilterTriple {
    let read = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    };
    FilterTriple {
        field: read(X_FILTER_BY),
        operator: read(X_FILTER_OPERATOR),
        value: read(X_FILTER_VALUE),
    }
}
