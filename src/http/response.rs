//! Response building.
//!
//! # Responsibilities
//! - Serialize contact pages with paging headers
//! - Redirect successful mutations with 303 See Other

use axum::{
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Json,
};

use crate::contacts::ContactId;
use crate::query::ContactPage;

pub const X_PAGE_TOTAL: &str = "x-page-total";
pub const X_PAGE_NEXT: &str = "x-page-next";
pub const X_PAGE_PREV: &str = "x-page-prev";

/// Header value for a next/previous page, `null` when absent.
fn page_header(page: Option<usize>) -> HeaderValue {
    page.map_or_else(|| HeaderValue::from_static("null"), HeaderValue::from)
}

/// 200 with the page's contacts and the `X-Page-*` headers.
pub fn page_response(page: ContactPage) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(X_PAGE_TOTAL, HeaderValue::from(page.total));
    headers.insert(X_PAGE_NEXT, page_header(page.next));
    headers.insert(X_PAGE_PREV, page_header(page.prev));

    (StatusCode::OK, headers, Json(page.contacts)).into_response()
}

/// Location of a single contact.
pub fn contact_location(id: ContactId) -> String {
    format!("/contacts/{id}")
}

/// 303 See Other to `location`.
pub fn see_other(location: &str) -> Response {
    Redirect::to(location).into_response()
}
