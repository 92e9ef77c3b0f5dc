//! Logger module.
//!
//! Info and access lines go to stdout, errors and warnings to stderr.

mod format;

pub use format::AccessLogEntry;

use std::net::SocketAddr;
use std::path::Path;

pub fn log_server_start(addr: &SocketAddr, root: &Path) {
    println!("======================================");
    println!("Serving HTTP on http://{addr}/");
    println!("Root directory: {}", root.display());
    println!("Press Ctrl+C to stop.");
    println!("======================================");
}

pub fn log_shutdown() {
    println!("Interrupt received, closing listener.");
}

/// Emit one access-log line for a completed request.
pub fn log_access(entry: &AccessLogEntry) {
    println!("{}", entry.to_common_log());
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}
