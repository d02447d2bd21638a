//! Error types for the reqwest-backed transport.
//!
//! # Design
//! The adapter never surfaces these to its callers; it turns them into a
//! synthesized 500 response using their `Display` text. They stay typed so
//! code that drives `ReqwestTransport` directly can still match on them.

use thiserror::Error;

/// Failures produced by `ReqwestTransport` and its responses.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent or no response arrived.
    #[error("{0}")]
    Request(#[source] reqwest::Error),

    /// A header name or value is not valid on the wire.
    #[error("invalid header {name:?}")]
    InvalidHeader { name: String },

    /// The response payload could not be read.
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    /// The response payload is not valid JSON.
    #[error("invalid JSON in response body: {0}")]
    Json(#[from] serde_json::Error),

    /// The reqwest client could not be constructed from the configuration.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}
