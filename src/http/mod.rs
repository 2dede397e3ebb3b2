//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID, body/path/header extraction)
//!     → handlers.rs (store access, query pipeline)
//!     → response.rs (JSON, paging headers, 303 redirects)
//!     → error.rs (ApiError → status + {"message"})
//! ```

pub mod error;
pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use error::{ApiError, ApiResult};
pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
