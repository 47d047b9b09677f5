//! In-memory quote list served by the endpoint.
//!
//! The list is read once at startup and never changes afterwards, so handlers share
//! it through an `Arc` without locking.
use std::fs;
use std::path::Path;

use log::{info, warn};
use quote_common::quote::parse_quote_list;
use quote_common::{Quote, QuoteList, Result};

/// Quotes served when no file is given.
const BUILTIN_QUOTES: [(&str, &str); 3] = [
    ("The only way to do great work is to love what you do.", "Steve Jobs"),
    ("Be yourself; everyone else is already taken.", "Oscar Wilde"),
    ("It always seems impossible until it's done.", "Nelson Mandela"),
];

pub struct QuoteStore {
    quotes: QuoteList,
}

impl QuoteStore {
    pub fn from_quotes(quotes: QuoteList) -> Self {
        if quotes.is_empty() {
            warn!("Quote list is empty; clients will not be able to select a quote");
        }
        Self { quotes }
    }

    /// Loads and validates a JSON array of `{ "text", "author" }` objects.
    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        let quotes = parse_quote_list(&bytes)?;
        info!("Loaded {} quotes from {}", quotes.len(), path.display());
        Ok(Self::from_quotes(quotes))
    }

    pub fn builtin() -> Self {
        let quotes = BUILTIN_QUOTES
            .iter()
            .map(|(text, author)| Quote::new(*text, *author))
            .collect();
        Self::from_quotes(quotes)
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }
}
