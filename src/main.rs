//! Contacts API server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http::server (request id, trace, timeout; body cap on extraction)
//!                         │
//!                         ▼
//!                     http::handlers ──▶ query (filter → sort → page)
//!                         │
//!                         ▼
//!                     contacts::store (Mutex, one handler at a time)
//!                         │
//!     Client Response     ▼
//!     ◀────────────── http::response / http::error
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use contacts_api::config::{load_config, validate_config, ConfigError, ServiceConfig};
use contacts_api::contacts::{load_seed, ContactStore};
use contacts_api::lifecycle::Shutdown;
use contacts_api::observability::{logging, metrics};
use contacts_api::HttpServer;

#[derive(Parser)]
#[command(name = "contacts-api")]
#[command(about = "In-memory contacts REST API", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    logging::init_logging(&config.observability)?;

    tracing::info!("contacts-api v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_bytes = config.limits.max_body_bytes,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let store = match &config.store.seed_path {
        Some(path) => load_seed(path)?,
        None => ContactStore::new(),
    };

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        contacts = store.len(),
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    shutdown.trigger_on_termination();

    let server = HttpServer::new(config, store);
    server.run(listener, shutdown.signalled()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
