// Connection handling
// Serves one accepted TCP connection on its own task.

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpStream;

use crate::config::Config;
use crate::handler;
use crate::logger;

/// Spawn a task that serves `stream` until the client is done with it.
///
/// Keep-alive is enabled, so one task may see several request/response
/// cycles. The only state the task shares is the read-only config.
pub fn spawn(stream: TcpStream, peer_addr: SocketAddr, config: Arc<Config>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().keep_alive(true).serve_connection(
            io,
            service_fn(move |req| {
                let config = Arc::clone(&config);
                async move { handler::handle_request(req, peer_addr, config).await }
            }),
        );

        // Malformed requests surface here once hyper gives up on the
        // connection; the process keeps serving others.
        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
