//! In-memory quote sources for unit tests.
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crossbeam_channel::Receiver;
use quote_common::{Quote, QuoteError, QuoteList, Result};

use crate::provider::FetchOutcome;
use crate::source::QuoteSource;

/// Serves the same list on every call and counts the calls.
pub struct StaticSource {
    quotes: QuoteList,
    calls: AtomicUsize,
}

impl StaticSource {
    pub fn new(quotes: QuoteList) -> Self {
        Self {
            quotes,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl QuoteSource for StaticSource {
    fn fetch_quotes(&self) -> Result<QuoteList> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.quotes.clone())
    }
}

/// Fails every call as an unreachable endpoint would.
pub struct FailingSource;

impl QuoteSource for FailingSource {
    fn fetch_quotes(&self) -> Result<QuoteList> {
        Err(QuoteError::Http("connection refused".to_string()))
    }
}

pub fn two_quotes() -> QuoteList {
    vec![Quote::new("A", "X"), Quote::new("B", "Y")]
}

pub fn next_outcome(rx: &Receiver<FetchOutcome>) -> FetchOutcome {
    rx.recv_timeout(Duration::from_secs(5))
        .expect("fetch outcome within 5s")
}
