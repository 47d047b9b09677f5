//! Home screen: the quote of the day.
//!
//! The screen owns `selected`, the only piece of state the quote flow has. It is
//! replaced by accepted fetch outcomes and never touched by failed or stale ones.
use std::io::{self, Write};

use log::{debug, info, warn};
use quote_common::Quote;

use crate::provider::{FetchOutcome, QuoteProvider};
use crate::screen::Screen;

/// Label of the control requesting another quote.
pub const ANOTHER_QUOTE_LABEL: &str = "Show Me Another Quote!";

pub struct HomeScreen {
    provider: QuoteProvider,
    selected: Option<Quote>,
}

impl HomeScreen {
    pub fn new(provider: QuoteProvider) -> Self {
        Self {
            provider,
            selected: None,
        }
    }

    /// Issues the mount-time fetch. Re-mounting does not fetch again.
    pub fn mount(&mut self) {
        if let Some(generation) = self.provider.initialize() {
            info!("Home screen mounted, fetching first quote (generation {})", generation);
        }
    }

    /// Whether the "another quote" control is on screen.
    pub fn has_control(&self) -> bool {
        self.selected.is_some()
    }

    /// Handler of the "another quote" control.
    pub fn request_another(&mut self) {
        let generation = self.provider.refresh();
        debug!("Another quote requested (generation {})", generation);
    }

    /// Applies a fetch outcome. Returns `true` when the selected quote changed.
    ///
    /// Outcomes of superseded requests are dropped. Failures are logged and leave the
    /// current selection as it was; the user is not told.
    pub fn apply(&mut self, outcome: FetchOutcome) -> bool {
        if !self.provider.is_current(&outcome) {
            debug!(
                "Discarding quote of stale generation {} (current {})",
                outcome.generation,
                self.provider.generation()
            );
            return false;
        }
        match outcome.result {
            Ok(quote) => {
                debug!("Selected quote by {}", quote.author);
                self.selected = Some(quote);
                true
            }
            Err(e) => {
                warn!("Quote fetch (generation {}) failed: {}", outcome.generation, e);
                false
            }
        }
    }

    pub fn selected(&self) -> Option<&Quote> {
        self.selected.as_ref()
    }
}

impl Screen for HomeScreen {
    fn title(&self) -> &'static str {
        "Home"
    }

    fn render_body(&self, out: &mut dyn Write) -> io::Result<()> {
        if let Some(quote) = &self.selected {
            writeln!(out, "\"{}\"", quote.text)?;
            writeln!(out, "    - {}", quote.author)?;
            writeln!(out, "[ {} ]  (Enter or `next`)", ANOTHER_QUOTE_LABEL)?;
        }
        Ok(())
    }
}
