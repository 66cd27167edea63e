//! Shared networking constants and helpers used by client and server.

/// TCP port the HTTP server listens on.
pub const SERVER_PORT: u16 = 8080;
/// Interface the server binds to by default.
pub const BIND_HOST: &str = "0.0.0.0";
/// Base URL the client talks to when `--server` is not given.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";

/// Helper to format a host and a port like "host:port".
pub fn addr(host: &str, port: u16) -> String {
    format!("{}:{}", host, port)
}
