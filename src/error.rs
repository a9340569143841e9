//! Taxonomy error types.
//!
//! Classification itself is total: absent descriptor fields degrade to
//! "unknown" and every derivation has a defined fallback. The fallible
//! surface is limited to parsing category tokens from strings and
//! deserializing descriptor payloads.

use thiserror::Error;

/// Taxonomy errors.
#[derive(Error, Debug)]
pub enum TaxaError {
    /// String does not name a registered category.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for taxonomy operations
pub type Result<T> = std::result::Result<T, TaxaError>;
