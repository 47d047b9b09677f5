//! Shared networking constants and helpers used by client and server.

/// Host of the development quote service.
pub const DEFAULT_HOST: &str = "localhost";
/// Address the development quote server binds to.
pub const DEFAULT_BIND_IP: &str = "127.0.0.1";
/// HTTP port of the development quote service.
pub const DEFAULT_PORT: u16 = 3000;
/// Path serving the full quote list.
pub const QUOTES_PATH: &str = "/quotes";

/// Helper to format an address with a port like "ip:port".
pub fn addr(ip: &str, port: u16) -> String {
    format!("{}:{}", ip, port)
}

/// Full URL of the quotes endpoint on `host:port`.
pub fn quotes_url(host: &str, port: u16) -> String {
    format!("http://{}{}", addr(host, port), QUOTES_PATH)
}
