//! Error types for the remote task store client

use thiserror::Error;

/// Errors that can occur when interacting with the remote task store
///
/// Both runtime failure kinds surface to callers as a single human-readable
/// message via `Display`; there are no distinct recovery paths.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing `TASKS_API_URL` environment variable
    ///
    /// A startup-time configuration fault, not a runtime error.
    #[error("Missing TASKS_API_URL environment variable")]
    MissingBaseUrl,

    /// Transport-level failure: connection refused, or a non-success status
    #[error("Request failed: {0}")]
    Network(String),

    /// Response body does not match the expected shape
    #[error("Response decoding failed: {0}")]
    Decode(String),
}
