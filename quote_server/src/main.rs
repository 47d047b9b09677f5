//! Quotes HTTP development server.
//!
//! Serves the quote list the client fetches: `GET /quotes` answers with the whole list
//! as a JSON array of `{ "text", "author" }` objects. The list comes from a JSON file
//! (`--quotes-file`) or, without one, from a small built-in set.
//!
//! Usage example (CLI):
//! ```bash
//! quote_server --bind 127.0.0.1:3000 --quotes-file quote_server/data/quotes.json
//! ```
#![warn(missing_docs)]
mod args;
mod routes;
mod store;

use crate::args::Args;
use crate::store::QuoteStore;
use clap::Parser;
use log::{error, info};
use quote_common::QuoteError;
use quote_common::Result;
use quote_common::config::{normalize_arg, normalize_path};
use quote_common::net::QUOTES_PATH;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();

    let store = match args.quotes_file.as_deref() {
        Some(path) => QuoteStore::from_file(&normalize_path(path))?,
        None => {
            info!("No quotes file given, serving the built-in list");
            QuoteStore::builtin()
        }
    };
    let app = routes::router(Arc::new(store));

    let listener = TcpListener::bind(normalize_arg(&args.bind)).await?;
    info!(
        "Quote server listening on http://{}{}",
        listener.local_addr()?,
        QUOTES_PATH
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Quote server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Ctrl+C received. Shutting down server..."),
        Err(e) => {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
