//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger_on_termination → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     trigger → Shutdown::signalled resolves → server stops accepting
//!     → in-flight requests drain → exit
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::wait_for_termination;
