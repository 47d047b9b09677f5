//! Command-line arguments for the Quote Client.
//!
//! This module defines the CLI interface using `clap`. Every flag can also be
//! supplied through the environment. See `main` for end-to-end usage.
use clap::Parser;
use quote_common::net::{DEFAULT_HOST, DEFAULT_PORT, quotes_url};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// URL of the endpoint returning the JSON quote list.
    #[arg(long, env = "QUOTES_ENDPOINT", default_value_t = quotes_url(DEFAULT_HOST, DEFAULT_PORT))]
    pub endpoint: String,

    /// Per-request timeout in seconds.
    #[arg(long, env = "QUOTES_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Directory acting as the media library for the profile image picker.
    /// Without it, media library permission is denied.
    #[arg(long, env = "QUOTES_MEDIA_DIR")]
    pub media_dir: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_quotes_endpoint() {
        let args = Args::try_parse_from(["quote_client"]).unwrap();
        assert_eq!(args.endpoint, "http://localhost:3000/quotes");
        assert_eq!(args.timeout_secs, 10);
        assert!(args.media_dir.is_none());
    }

    #[test]
    fn accepts_overrides() {
        let args = Args::try_parse_from([
            "quote_client",
            "--endpoint",
            "http://10.0.0.2:3000/quotes",
            "--timeout-secs",
            "3",
            "--media-dir",
            "/tmp/pictures",
        ])
        .unwrap();
        assert_eq!(args.endpoint, "http://10.0.0.2:3000/quotes");
        assert_eq!(args.timeout_secs, 3);
        assert_eq!(args.media_dir.as_deref(), Some("/tmp/pictures"));
    }
}
