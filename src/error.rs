//! Error types for the roolink library.

use thiserror::Error;

/// Main error type for the roolink library.
#[derive(Error, Debug)]
pub enum RoolinkError {
    /// Request body serialization failed
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] rquest::Error),

    /// The API returned an error status
    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// Response body deserialization failed
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Result type alias for roolink operations.
pub type Result<T> = std::result::Result<T, RoolinkError>;
