//! Command-line arguments for the Quote Server.
use clap::Parser;
use quote_common::net::{DEFAULT_BIND_IP, DEFAULT_PORT, addr};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Address to listen on.
    #[arg(long, env = "QUOTES_BIND", default_value_t = addr(DEFAULT_BIND_IP, DEFAULT_PORT))]
    pub bind: String,

    /// JSON file holding the quote list. The built-in list is served without it.
    #[arg(long, env = "QUOTES_FILE")]
    pub quotes_file: Option<String>,
}
