//! API Error Types
//!
//! The three failure classes a request can land in. Nothing here is
//! retried; a failed call is terminal for that user action.

use thiserror::Error;

/// Errors surfaced by the remote store client
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No active session; the call was refused before any request was sent
    #[error("Please log in first")]
    NoSession,

    /// The server rejected our credentials (HTTP 401)
    #[error("Session expired or unauthorized. Please log in again")]
    Unauthorized,

    /// Any other non-success status, network failure, or bad payload
    #[error("{0}")]
    Request(String),
}

impl ApiError {
    /// Wrap a transport-level failure
    pub fn network(err: impl std::fmt::Display) -> Self {
        ApiError::Request(format!("Network error: {}", err))
    }

    /// Wrap a response-body decode failure
    pub fn parse(err: impl std::fmt::Display) -> Self {
        ApiError::Request(format!("Parse error: {}", err))
    }
}
