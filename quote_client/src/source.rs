//! Where quote lists come from.
//!
//! `QuoteSource` is the seam between the provider and the network: the provider only
//! needs "give me the whole list". `HttpQuoteSource` implements it with a blocking
//! `reqwest` client, one GET per call and no caching.
use std::time::Duration;

use log::debug;
use quote_common::quote::parse_quote_list;
use quote_common::{QuoteError, QuoteList, Result};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;

/// Anything able to produce a fresh `QuoteList` on demand.
pub trait QuoteSource: Send + Sync {
    /// Fetches the full quote list. Every call performs a new round-trip.
    fn fetch_quotes(&self) -> Result<QuoteList>;
}

/// Quote source backed by an HTTP endpoint returning a JSON array.
pub struct HttpQuoteSource {
    endpoint: String,
    client: Client,
}

impl HttpQuoteSource {
    /// Builds a source for `endpoint` whose requests give up after `timeout`.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| QuoteError::Http(e.to_string()))?;
        Ok(Self {
            endpoint: endpoint.to_string(),
            client,
        })
    }

    /// Endpoint this source queries.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl QuoteSource for HttpQuoteSource {
    fn fetch_quotes(&self) -> Result<QuoteList> {
        debug!("GET {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| QuoteError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .map_err(|e| QuoteError::Http(e.to_string()))?;
        let quotes = parse_quote_list(&body)?;
        debug!("Received {} quotes from {}", quotes.len(), self.endpoint);
        Ok(quotes)
    }
}
