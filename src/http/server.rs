//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, limits, request ID, metrics)
//! - Bind server to listener
//! - Stop gracefully on the shutdown signal

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::get,
    Router,
};
use std::future::Future;
use std::sync::MutexGuard;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::contacts::{ContactStore, SharedStore};
use crate::http::error::ApiError;
use crate::http::handlers;
use crate::http::request::MakeRequestUuid;
use crate::observability::metrics;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
}

impl AppState {
    pub fn new(store: ContactStore) -> Self {
        Self {
            store: store.into_shared(),
        }
    }

    /// Exclusive access to the store for the rest of a handler.
    pub fn lock(&self) -> Result<MutexGuard<'_, ContactStore>, ApiError> {
        self.store
            .lock()
            .map_err(|_| ApiError::Internal("contact store lock poisoned".into()))
    }
}

/// HTTP server for the contacts API.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server serving `store`.
    pub fn new(config: ServiceConfig, store: ContactStore) -> Self {
        metrics::record_store_size(store.len());
        Self {
            router: Self::build_router(&config, AppState::new(store)),
        }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Bodies over `max_body_bytes` fail while the payload is buffered, so
    /// they surface as a JSON 400 like any other unreadable body.
    #[allow(deprecated)]
    pub fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route(
                "/contacts",
                get(handlers::list_contacts).post(handlers::create_contact),
            )
            .route(
                "/contacts/{id}",
                get(handlers::get_contact)
                    .put(handlers::update_contact)
                    .delete(handlers::delete_contact),
            )
            .route_layer(middleware::from_fn(metrics::track_requests))
            .with_state(state)
            .layer(DefaultBodyLimit::max(config.limits.max_body_bytes))
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs))),
            )
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` resolves. In-flight requests are drained before returning.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
