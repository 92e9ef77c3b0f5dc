// Signal handling
// SIGINT and SIGTERM both request shutdown; the accept loop observes the
// notification and releases the listener on its way out.

use std::sync::Arc;
use tokio::sync::Notify;

use crate::logger;

/// Spawn the task that waits for an operator interrupt (Unix).
#[cfg(unix)]
pub fn spawn_interrupt_listener(shutdown: Arc<Notify>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let mut sigint = match signal(SignalKind::interrupt()) {
            Ok(s) => s,
            Err(e) => {
                logger::log_error(&format!("Failed to register SIGINT handler: {e}"));
                return;
            }
        };
        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(s) => s,
            Err(e) => {
                logger::log_error(&format!("Failed to register SIGTERM handler: {e}"));
                return;
            }
        };

        tokio::select! {
            _ = sigint.recv() => {}
            _ = sigterm.recv() => {}
        }
        shutdown.notify_waiters();
    });
}

/// Fallback for non-Unix targets: only Ctrl+C is observed.
#[cfg(not(unix))]
pub fn spawn_interrupt_listener(shutdown: Arc<Notify>) {
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            logger::log_error(&format!("Failed to listen for Ctrl+C: {e}"));
            return;
        }
        shutdown.notify_waiters();
    });
}
