//! Shutdown coordination for the service.

use std::future::Future;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use super::signals::wait_for_termination;

/// Cloneable shutdown handle shared by the server and the signal listener.
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// A future that resolves once shutdown is triggered, or once every
    /// handle has been dropped.
    ///
    /// The listener is registered on the call, so a trigger that happens
    /// before the future is first polled is still observed.
    pub fn signalled(&self) -> impl Future<Output = ()> + Send + 'static {
        let mut rx = self.tx.subscribe();
        async move {
            let _ = rx.recv().await;
        }
    }

    /// Notify every pending listener. Returns how many were notified.
    pub fn trigger(&self) -> usize {
        let listeners = self.tx.send(()).unwrap_or(0);
        tracing::info!(listeners, "Shutdown triggered");
        listeners
    }

    /// Trigger shutdown when the process is asked to terminate.
    pub fn trigger_on_termination(&self) -> JoinHandle<()> {
        let shutdown = self.clone();
        tokio::spawn(async move {
            wait_for_termination().await;
            shutdown.trigger();
        })
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
