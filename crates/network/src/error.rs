// crates/network/src/error.rs
//! Error types for network operations

use thiserror::Error;

/// Result type for network operations
pub type NetworkResult<T> = Result<T, NetworkError>;

/// Errors that can occur while fetching a document
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Transport failure, timeout, or redirect limit reached
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The URL does not parse or is not http(s)
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The server answered with a non-success status
    #[error("HTTP {code}: {reason}")]
    Status { code: u16, reason: String },

    /// The body exceeds the configured limit
    #[error("Response body larger than {limit} bytes")]
    BodyTooLarge { limit: u64 },

    /// The connection closed before `Content-Length` bytes arrived
    #[error("Incomplete response: expected {expected} bytes, received {received}")]
    IncompleteResponse { expected: u64, received: u64 },
}

impl NetworkError {
    /// Returns true if the server reported a client error (4xx)
    pub fn is_client_error(&self) -> bool {
        matches!(self, NetworkError::Status { code, .. } if (400..500).contains(code))
    }

    /// Returns true if the server reported a server error (5xx)
    pub fn is_server_error(&self) -> bool {
        matches!(self, NetworkError::Status { code, .. } if (500..600).contains(code))
    }

    /// Returns true if the request timed out
    pub fn is_timeout(&self) -> bool {
        matches!(self, NetworkError::Http(e) if e.is_timeout())
    }
}
