//! Quote provider: turns a `QuoteSource` into outcomes the UI loop can apply.
//!
//! Every `initialize`/`refresh` spawns one worker thread that fetches the full list,
//! picks a random quote and reports a `FetchOutcome` over a crossbeam channel. The
//! provider stamps each request with a generation number; a new `refresh` makes every
//! older generation stale, so a slow response can never overwrite a newer one.
use std::sync::Arc;
use std::thread;

use crossbeam_channel::Sender;
use log::debug;
use quote_common::quote::select_random;
use quote_common::{Quote, Result};
use rand::Rng;

use crate::source::QuoteSource;

/// Monotonic request counter. `0` means nothing was requested yet.
pub type Generation = u64;

/// Result of one fetch, tagged with the request that produced it.
#[derive(Debug)]
pub struct FetchOutcome {
    /// Request generation this outcome answers.
    pub generation: Generation,
    /// The randomly selected quote, or why there is none.
    pub result: Result<Quote>,
}

/// Issues quote fetches and tracks which one is current.
pub struct QuoteProvider {
    source: Arc<dyn QuoteSource>,
    outcome_tx: Sender<FetchOutcome>,
    generation: Generation,
    initialized: bool,
}

impl QuoteProvider {
    /// Creates a provider reporting outcomes on `outcome_tx`. Nothing is fetched yet.
    pub fn new(source: Arc<dyn QuoteSource>, outcome_tx: Sender<FetchOutcome>) -> Self {
        Self {
            source,
            outcome_tx,
            generation: 0,
            initialized: false,
        }
    }

    /// Mount-time fetch. Only the first call fetches; later calls return `None`.
    pub fn initialize(&mut self) -> Option<Generation> {
        if self.initialized {
            debug!("Quote provider already initialized, skipping fetch");
            return None;
        }
        self.initialized = true;
        Some(self.refresh())
    }

    /// Starts a new fetch and makes all earlier requests stale.
    pub fn refresh(&mut self) -> Generation {
        self.generation += 1;
        let generation = self.generation;
        let source = Arc::clone(&self.source);
        let outcome_tx = self.outcome_tx.clone();

        debug!("Starting quote fetch, generation {}", generation);
        thread::spawn(move || {
            let result = fetch_random_quote(source.as_ref(), &mut rand::rng());
            if outcome_tx.send(FetchOutcome { generation, result }).is_err() {
                debug!("Outcome of generation {} dropped: UI loop is gone", generation);
            }
        });
        generation
    }

    /// Whether `outcome` answers the most recent request.
    pub fn is_current(&self, outcome: &FetchOutcome) -> bool {
        outcome.generation == self.generation
    }

    /// Generation of the most recent request.
    pub fn generation(&self) -> Generation {
        self.generation
    }
}

/// One fetch: GET the list, then pick one element uniformly at random.
pub fn fetch_random_quote<R: Rng + ?Sized>(source: &dyn QuoteSource, rng: &mut R) -> Result<Quote> {
    let quotes = source.fetch_quotes()?;
    select_random(&quotes, rng).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FailingSource, StaticSource, next_outcome, two_quotes};
    use crossbeam_channel::unbounded;
    use quote_common::QuoteError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::Duration;

    #[test]
    fn initialize_fetches_exactly_once() {
        let source = Arc::new(StaticSource::new(two_quotes()));
        let (tx, rx) = unbounded();
        let mut provider = QuoteProvider::new(source.clone(), tx);

        assert_eq!(provider.initialize(), Some(1));
        assert_eq!(provider.initialize(), None);
        assert_eq!(provider.initialize(), None);

        let outcome = next_outcome(&rx);
        assert_eq!(outcome.generation, 1);
        assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
        assert_eq!(source.calls(), 1);
    }

    #[test]
    fn refresh_issues_one_request_per_call() {
        let source = Arc::new(StaticSource::new(two_quotes()));
        let (tx, rx) = unbounded();
        let mut provider = QuoteProvider::new(source.clone(), tx);

        provider.initialize();
        provider.refresh();
        provider.refresh();

        let mut generations: Vec<_> = (0..3).map(|_| next_outcome(&rx).generation).collect();
        generations.sort();
        assert_eq!(generations, vec![1, 2, 3]);
        assert_eq!(source.calls(), 3);
    }

    #[test]
    fn only_the_latest_generation_is_current() {
        let (tx, rx) = unbounded();
        let mut provider = QuoteProvider::new(Arc::new(StaticSource::new(two_quotes())), tx);

        provider.refresh();
        provider.refresh();
        let first = next_outcome(&rx);
        let second = next_outcome(&rx);

        let (older, newer) = if first.generation < second.generation {
            (first, second)
        } else {
            (second, first)
        };
        assert!(!provider.is_current(&older));
        assert!(provider.is_current(&newer));
        assert_eq!(provider.generation(), 2);
    }

    #[test]
    fn fetched_quote_comes_from_the_list() {
        let source = StaticSource::new(two_quotes());
        for seed in 0..50 {
            let quote = fetch_random_quote(&source, &mut StdRng::seed_from_u64(seed)).unwrap();
            assert!(two_quotes().contains(&quote));
        }
    }

    #[test]
    fn empty_list_fails_the_fetch() {
        let source = StaticSource::new(Vec::new());
        let err = fetch_random_quote(&source, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(err, QuoteError::EmptyQuoteList));
    }

    #[test]
    fn source_failure_is_carried_in_the_outcome() {
        let (tx, rx) = unbounded();
        let mut provider = QuoteProvider::new(Arc::new(FailingSource), tx);

        provider.initialize();

        let outcome = next_outcome(&rx);
        assert!(matches!(outcome.result, Err(QuoteError::Http(_))));
    }
}
