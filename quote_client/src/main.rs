//! Quote Client, a terminal front-end with three screens: Home shows a random quote
//! of the day fetched from an HTTP endpoint, My Diary and Profile hold form values for
//! the lifetime of the process.
//!
//! Usage example (CLI):
//! ```bash
//! quote_client --endpoint http://localhost:3000/quotes --media-dir ~/Pictures
//! ```
//!
//! Type `help` at the prompt for the list of commands. An empty line asks for
//! another quote while one is shown.
#![warn(missing_docs)]
mod app;
mod args;
mod input;
mod media;
mod navigation;
mod provider;
mod screen;
mod source;
#[cfg(test)]
mod testing;

use crate::app::App;
use crate::args::Args;
use crate::input::{UiEvent, spawn_input_reader};
use crate::media::FsMediaLibrary;
use crate::provider::{FetchOutcome, QuoteProvider};
use crate::screen::diary::DiaryScreen;
use crate::screen::home::HomeScreen;
use crate::screen::profile::ProfileScreen;
use crate::source::HttpQuoteSource;
use clap::Parser;
use crossbeam_channel::unbounded;
use log::info;
use quote_common::QuoteError;
use quote_common::Result;
use quote_common::config::{normalize_arg, normalize_path};
use std::io;
use std::sync::Arc;
use std::time::Duration;

fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();

    let endpoint = normalize_arg(&args.endpoint);
    let source = HttpQuoteSource::new(endpoint, Duration::from_secs(args.timeout_secs))?;
    info!("Quotes endpoint: {}", source.endpoint());

    let (event_tx, event_rx) = unbounded::<UiEvent>();
    let (outcome_tx, outcome_rx) = unbounded::<FetchOutcome>();
    {
        let event_tx = event_tx.clone();
        ctrlc::set_handler(move || {
            info!("Ctrl+C received. Shutting down client...");
            let _ = event_tx.send(UiEvent::Shutdown);
        })
        .map_err(|e| QuoteError::Format(format!("Error setting Ctrl+C handler: {}", e)))?;
    }
    spawn_input_reader(event_tx);

    let media_dir = args.media_dir.as_deref().map(normalize_path);
    if media_dir.is_none() {
        info!("No media directory configured, image picker will be unavailable");
    }

    let mut app = App::new(
        HomeScreen::new(QuoteProvider::new(Arc::new(source), outcome_tx)),
        DiaryScreen::default(),
        ProfileScreen::new(Box::new(FsMediaLibrary::new(media_dir))),
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    app.run(event_rx, outcome_rx, &mut out)
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
