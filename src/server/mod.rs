//! Server module.
//!
//! Listener construction, the accept loop, per-connection serving, and
//! interrupt handling.

pub mod conn;
pub mod listener;
pub mod signal;

pub use listener::bind;

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use crate::config::Config;
use crate::logger;

/// Accept connections until shutdown is requested.
///
/// Each accepted connection is handed to its own task; accept errors are
/// logged and the loop continues. The listener is owned here, so it is
/// released on every exit path.
pub async fn run(
    listener: TcpListener,
    config: Arc<Config>,
    shutdown: Arc<Notify>,
) -> std::io::Result<()> {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        conn::spawn(stream, peer_addr, Arc::clone(&config));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = shutdown.notified() => {
                logger::log_shutdown();
                break;
            }
        }
    }

    Ok(())
}
