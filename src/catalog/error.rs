//! Errors raised while loading the catalog.

use thiserror::Error;

/// Failure modes of the one-time catalog load.
///
/// Individual malformed measures are not errors; they are skipped during
/// parsing. Only failures that leave the whole catalog unusable end up here.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request never produced a response (network, CORS, timeout, abort).
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status code.
    #[error("server responded with HTTP {0}")]
    Status(u16),

    /// The response body could not be read as text.
    #[error("failed to read response body: {0}")]
    Body(String),

    /// The body was not valid JSON.
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON payload has no object-valued `measures` field.
    #[error("payload has no `measures` object")]
    MissingMeasures,
}
