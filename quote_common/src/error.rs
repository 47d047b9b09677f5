//! Error types shared between client and server.
//!
//! The `QuoteError` enum unifies the failure cases of fetching, decoding and
//! serving quotes, as well as terminal I/O and channel plumbing, so every crate
//! in the workspace can propagate a single error type.
use std::io;

use thiserror::Error;

/// Unified error type shared by client and server.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// I/O error originating from the standard library, sockets or files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// The HTTP request could not be built, sent or read.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The quotes endpoint answered with a non-success status code.
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    /// The quotes endpoint returned an empty list, so nothing can be selected.
    #[error("Quote list is empty")]
    EmptyQuoteList,

    /// A slider value outside of the accepted range.
    #[error("Rating {value} is out of range {min}..={max}")]
    InvalidRating {
        /// Rejected value.
        value: i64,
        /// Lowest accepted value.
        min: u8,
        /// Highest accepted value.
        max: u8,
    },

    /// Media library access was refused, the image picker cannot be used.
    #[error("Media library permission denied")]
    PermissionDenied,

    /// Crossbeam/channel receive failed (e.g., sender closed); contains a short context string.
    #[error("Channel receive failed: {0}")]
    ChannelRecv(String),
}
