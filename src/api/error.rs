//! Data-source-specific error types.

/// Errors that can occur while talking to the console API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API error (status {status}): {message}")]
    Status { status: u16, message: String },

    /// Record not found
    #[error("{resource} record not found: {id}")]
    NotFound { resource: String, id: String },

    /// Failed to deserialize API response
    #[error("Failed to deserialize API response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// Base URL is not an absolute URL able to hold endpoint paths
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    /// Resource name not known to the console
    #[error("Unknown resource: {0}")]
    UnknownResource(String),
}
