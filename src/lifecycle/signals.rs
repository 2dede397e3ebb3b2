//! OS signal handling.
//!
//! Ctrl+C (SIGINT) and, on Unix, SIGTERM both request a graceful shutdown.

use std::future::pending;

/// Resolve once the process is asked to terminate.
///
/// A signal handler that fails to install is logged and then never fires.
pub async fn wait_for_termination() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!(signal = "SIGINT", "Termination requested"),
        _ = terminate => tracing::info!(signal = "SIGTERM", "Termination requested"),
    }
}
