//! Quote data model and random selection.
//!
//! A `Quote` is the payload served by the quotes endpoint: a text and its author.
//! The endpoint always returns the whole list as a JSON array; the client picks one
//! element uniformly at random for display.
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::QuoteError;
use crate::result::Result;

/// A single quote as served by the quotes endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Quote body.
    pub text: String,
    /// Person the quote is attributed to.
    pub author: String,
}

/// Ordered list of quotes, received whole on every fetch.
pub type QuoteList = Vec<Quote>;

impl Quote {
    /// Creates a new quote.
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Quote {
            text: text.into(),
            author: author.into(),
        }
    }
}

/// Decode a response body into a `QuoteList`.
///
/// The body must be a JSON array of `{ "text", "author" }` objects; extra fields
/// on each object are ignored.
pub fn parse_quote_list(bytes: &[u8]) -> Result<QuoteList> {
    let quotes = serde_json::from_slice(bytes)?;
    Ok(quotes)
}

/// Pick one quote uniformly at random by index in `[0, len)`.
///
/// An empty list has nothing to pick from and yields `QuoteError::EmptyQuoteList`.
pub fn select_random<'a, R: Rng + ?Sized>(quotes: &'a [Quote], rng: &mut R) -> Result<&'a Quote> {
    if quotes.is_empty() {
        return Err(QuoteError::EmptyQuoteList);
    }
    let index = rng.random_range(0..quotes.len());
    Ok(&quotes[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn two_quotes() -> QuoteList {
        vec![Quote::new("A", "X"), Quote::new("B", "Y")]
    }

    #[test]
    fn selection_is_always_a_member_of_the_list() {
        let quotes = two_quotes();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = select_random(&quotes, &mut rng).unwrap();
            assert!(quotes.contains(picked));
        }
    }

    #[test]
    fn selection_reaches_every_element() {
        let quotes = two_quotes();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen_a = false;
        let mut seen_b = false;
        for _ in 0..100 {
            match select_random(&quotes, &mut rng).unwrap().text.as_str() {
                "A" => seen_a = true,
                "B" => seen_b = true,
                other => panic!("unexpected quote {}", other),
            }
        }
        assert!(seen_a && seen_b);
    }

    #[test]
    fn single_quote_is_always_selected() {
        let quotes = vec![Quote::new("Only", "One")];
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(select_random(&quotes, &mut rng).unwrap(), &quotes[0]);
        }
    }

    #[test]
    fn empty_list_is_an_explicit_error() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = select_random(&[], &mut rng).unwrap_err();
        assert!(matches!(err, QuoteError::EmptyQuoteList));
    }

    #[test]
    fn parses_array_and_ignores_extra_fields() {
        let body = br#"[{"text":"A","author":"X","id":1},{"text":"B","author":"Y"}]"#;
        let quotes = parse_quote_list(body).unwrap();
        assert_eq!(quotes, two_quotes());
    }

    #[test]
    fn rejects_non_json_and_non_array_bodies() {
        assert!(matches!(
            parse_quote_list(b"<html>oops</html>"),
            Err(QuoteError::SerdeJson(_))
        ));
        assert!(matches!(
            parse_quote_list(br#"{"text":"A","author":"X"}"#),
            Err(QuoteError::SerdeJson(_))
        ));
        assert!(matches!(
            parse_quote_list(br#"[{"text":"A"}]"#),
            Err(QuoteError::SerdeJson(_))
        ));
    }

    #[test]
    fn parses_empty_array() {
        assert!(parse_quote_list(b"[]").unwrap().is_empty());
    }
}
