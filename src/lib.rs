//! In-memory contacts REST API.
//!
//! Five routes over a process-local contact store, with header-driven
//! filtering, query-driven sorting and paging, and a uniform JSON error body.

pub mod config;
pub mod contacts;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod query;

pub use config::ServiceConfig;
pub use contacts::{Contact, ContactStore};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
