//! Logger module
//!
//! Plain stdout/stderr logging: the startup reporter plus request,
//! warning, and error lines.

use crate::cachebust::CacheBust;
use crate::config::ServerConfig;
use hyper::{Method, Uri};

/// Emit the operator-facing startup lines once the listener is bound.
///
/// The cache-bust token rides along as a query string so a freshly
/// restarted instance is not hidden behind a stale cache entry when the
/// operator follows a printed URL.
pub fn log_server_start(config: &ServerConfig, cachebust: &CacheBust) {
    let base = format!("http://{}:{}", config.host, config.port);
    println!("Server is running on {base}?{cachebust}");
    println!("Visit {base}?{cachebust} to see the game");
    println!("API health check at {base}/api/health?{cachebust}");
}

pub fn log_request(method: &Method, uri: &Uri) {
    println!("[Request] {method} {uri}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}
