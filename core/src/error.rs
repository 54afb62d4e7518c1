//! Error types for the remote API and the key-value store

use thiserror::Error;

/// Errors returned by a [`CandidatesApi`](crate::ports::CandidatesApi) implementation
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Request failed: {0}")]
    Transport(String),

    /// Non-2xx response. `messages` holds the `errors` list when the body carried one.
    #[error("API error: {status}")]
    Status {
        status: u16,
        messages: Option<Vec<String>>,
    },

    /// A 2xx response whose body could not be decoded
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Messages to show the user, if the server provided any.
    pub fn server_messages(&self) -> Option<&[String]> {
        match self {
            ApiError::Status {
                messages: Some(messages),
                ..
            } => Some(messages),
            _ => None,
        }
    }
}

/// Errors raised by a [`KeyValueStore`](crate::ports::KeyValueStore)
#[derive(Debug, Error)]
pub enum StorageError {
    /// Backing medium missing (no window, no localStorage, ...)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Lock poisoned or backend-specific failure
    #[error("Internal storage error: {0}")]
    Internal(String),
}
