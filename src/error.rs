//! Error types for Modrinth API operations.
//!
//! Only transport and decode failures are errors. A response carrying an
//! API-level error payload (404, 401, ...) still decodes successfully and
//! is handed back to the caller as JSON.

use thiserror::Error;

/// Errors that can occur during Modrinth API operations.
#[derive(Debug, Error)]
pub enum ModrinthError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
}

/// Result type alias for Modrinth operations.
pub type Result<T> = core::result::Result<T, ModrinthError>;
