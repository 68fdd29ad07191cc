//! Client Error Types
//!
//! Failures that can occur while talking to the dashboard backend.

use thiserror::Error;

/// Errors returned by [`DashboardApi`](super::DashboardApi) implementations
#[derive(Error, Debug)]
pub enum ClientError {
    /// Connection refused, DNS failure, body read error, ...
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not the expected JSON
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status code, if the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for backend calls
pub type ClientResult<T> = Result<T, ClientError>;
