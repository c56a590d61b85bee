//! Error type definitions.

use log::SetLoggerError;
use thiserror::Error;

use crate::config::constants::FETCH_TIMEOUT_SECS;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] reqwest::Error),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error creating the database file.
    #[error("Database file creation error: {0}")]
    FileCreationError(String),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),

    /// Error serializing or deserializing a stored analysis result.
    #[error("Result serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// A stored record failed to decode (bad timestamp or result JSON).
    #[error("Corrupt stored record: {0}")]
    CorruptRecord(String),
}

/// Error types for page retrieval.
///
/// Display strings double as the user-visible messages returned by the API,
/// so they name the failure in client terms rather than transport terms.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request did not complete within the fetch timeout.
    #[error("Request timeout: URL took longer than {0} seconds to respond")]
    Timeout(u64),

    /// The server answered with a non-success status.
    #[error("Failed to fetch URL: HTTP {0}")]
    HttpStatus(u16),

    /// DNS resolution failed for the requested host.
    #[error("Failed to fetch URL: Domain not found")]
    DomainNotFound,

    /// The response body exceeds the configured size cap.
    #[error("Failed to fetch URL: response body exceeds {0} bytes")]
    BodyTooLarge(usize),

    /// Any other request failure (connect, redirect loop, decode, ...).
    #[error("Failed to fetch URL: {0}")]
    Request(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return FetchError::Timeout(FETCH_TIMEOUT_SECS);
        }
        if is_dns_failure(&e) {
            return FetchError::DomainNotFound;
        }
        // Strip the URL from the message; the caller already knows it
        FetchError::Request(e.without_url().to_string())
    }
}

/// Walks the error source chain looking for a DNS resolution failure.
fn is_dns_failure(e: &reqwest::Error) -> bool {
    if !e.is_connect() {
        return false;
    }
    let mut source = std::error::Error::source(e);
    while let Some(inner) = source {
        if inner.to_string().contains("dns error") {
            return true;
        }
        source = inner.source();
    }
    false
}
