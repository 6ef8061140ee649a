//! Client-level error types.

use civic_types::ApiError;
use thiserror::Error;

/// Failure to obtain a response at all (DNS, refused connection, broken body).
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Failed to read response body: {0}")]
    Body(String),
}

/// Errors surfaced by API client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend answered with a non-2xx status.
    #[error("API Error: {status} {status_text}")]
    Http {
        status: u16,
        status_text: String,
        body: Vec<u8>,
    },

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ClientError {
    /// HTTP status of a failed response, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Parse the failure body as the backend's `{message, code}` shape.
    ///
    /// The error path never depends on this; it is `None` whenever the body
    /// is absent or shaped differently.
    pub fn api_error(&self) -> Option<ApiError> {
        match self {
            ClientError::Http { body, .. } => serde_json::from_slice(body).ok(),
            _ => None,
        }
    }
}
