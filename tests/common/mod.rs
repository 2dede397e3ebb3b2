//! Shared utilities for integration tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use contacts_api::contacts::{ContactDraft, ContactStore};
use contacts_api::http::{AppState, HttpServer};
use contacts_api::ServiceConfig;

/// Router over `store`, plus the state for direct inspection.
pub fn app_with(store: ContactStore) -> (Router, AppState) {
    let state = AppState::new(store);
    let router = HttpServer::build_router(&ServiceConfig::default(), state.clone());
    (router, state)
}

pub fn app() -> (Router, AppState) {
    app_with(ContactStore::new())
}

/// A store holding `people` as (fname, lname, birthday) with derived emails.
pub fn store_of(people: &[(&str, &str, &str)]) -> ContactStore {
    let mut store = ContactStore::new();
    for (fname, lname, birthday) in people {
        let email = format!("{}.{}@example.com", fname, lname).to_lowercase();
        store
            .create(ContactDraft {
                fname: Some(fname.to_string()),
                lname: Some(lname.to_string()),
                email: Some(email),
                birthday: Some(birthday.to_string()),
            })
            .unwrap();
    }
    store
}

pub fn contact_body(fname: &str, lname: &str, email: &str, birthday: &str) -> Value {
    json!({"fname": fname, "lname": lname, "email": email, "birthday": birthday})
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    pub fn header(&self, name: &str) -> &str {
        self.headers.get(name).and_then(|v| v.to_str().ok()).unwrap_or("")
    }

    pub fn message(&self) -> &str {
        self.body["message"].as_str().unwrap_or("")
    }
}

/// Send a request through the router and decode the body as JSON (or Null).
pub async fn send(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    TestResponse { status, headers, body }
}

pub async fn get(router: &Router, uri: &str) -> TestResponse {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(router, request).await
}

pub async fn send_json(router: &Router, method: Method, uri: &str, body: &Value) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

pub async fn delete(router: &Router, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(router, request).await
}
