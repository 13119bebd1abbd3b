//! Error types for drugbank-extract.
//!
//! This module defines the error types returned by extraction and load
//! operations.

/// Error type for extraction and load operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required page section (anchor element) is missing entirely.
    ///
    /// Distinct from an optional field being absent, which is a valid
    /// "no value" outcome, not an error.
    #[error("missing document section: #{0}")]
    MissingSection(&'static str),

    /// The document structure around an anchor does not match the catalog's
    /// layout (bad obfuscation hex, odd term/value alternation, a missing
    /// value node).
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// Page fetch failed (transport error or non-success status).
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Page fetch returned an empty body.
    #[error("empty document body for identifier {0}")]
    EmptyDocument(String),

    /// Catalog URL could not be built for an identifier.
    #[error("invalid catalog URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Database connection or statement execution failed, including
    /// uniqueness and foreign-key violations that abort the load.
    #[error("database error: {0}")]
    Store(#[from] postgres::Error),
}

/// Result type alias for extraction and load operations.
pub type Result<T> = std::result::Result<T, Error>;
