//! Normalisation of raw command-line values.
//!
//! Values may arrive wrapped in quotes (Windows shells, `.env` files); both
//! binaries strip them before use.
use std::path::PathBuf;

/// Trim whitespace and a single pair of surrounding double quotes.
pub fn normalize_arg(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed)
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
pub fn normalize_path(raw: &str) -> PathBuf {
    PathBuf::from(normalize_arg(raw))
}
