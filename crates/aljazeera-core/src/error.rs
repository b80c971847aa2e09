//! Error types for the Al Jazeera catalog scraper
//!
//! Provides a small closed error enum so callers can distinguish every
//! failure by kind and render a meaningful message.

use thiserror::Error;

/// Error type for all catalog operations
#[derive(Error, Debug)]
pub enum AljazeeraError {
    /// HTTP request failed (connection error, timeout, or non-2xx status)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The JSON feed response could not be decoded, or a required field
    /// was missing or invalid on an entry
    #[error("Malformed feed response: {0}")]
    MalformedFeed(String),

    /// The category listing page could not be parsed as markup
    #[error("Malformed markup: {0}")]
    MalformedMarkup(String),

    /// Invalid argument supplied by the caller
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, AljazeeraError>;
