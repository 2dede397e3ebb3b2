//! Metrics collection and exposition.
//!
//! # Metrics
//! - `contacts_http_requests_total` (counter): requests by method, route, status
//! - `contacts_http_request_duration_seconds` (histogram): latency distribution
//! - `contacts_store_size` (gauge): contacts currently stored
//!
//! Without an installed recorder every call here is a no-op.

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus recorder and its scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;

    describe_counter!("contacts_http_requests_total", "Total HTTP requests handled");
    describe_histogram!(
        "contacts_http_request_duration_seconds",
        "HTTP request latency in seconds"
    );
    describe_gauge!("contacts_store_size", "Number of contacts in the store");

    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_request(method: &str, route: &str, status: u16, start: Instant) {
    counter!(
        "contacts_http_requests_total",
        "method" => method.to_string(),
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(
        "contacts_http_request_duration_seconds",
        "method" => method.to_string(),
        "route" => route.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

pub fn record_store_size(size: usize) {
    gauge!("contacts_store_size").set(size as f64);
}

/// Middleware recording one sample per routed request.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| request.uri().path().to_owned());

    let response = next.run(request).await;
    record_request(&method, &route, response.status().as_u16(), start);
    response
}
