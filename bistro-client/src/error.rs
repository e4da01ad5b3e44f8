//! Client error types

use reqwest::StatusCode;
use thiserror::Error;

/// Transport failure surfaced by the API client
///
/// Every way a call can fail collapses into this one type: the request
/// never completed, the server answered outside 200-299, or a success
/// body did not parse as the expected record payload.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network failure or protocol error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("unexpected status: {0}")]
    Status(StatusCode),

    /// Response body did not match the expected payload shape
    #[error("invalid response body: {0}")]
    Body(#[from] serde_json::Error),
}

impl TransportError {
    /// HTTP status carried by this failure, where one is available
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http(err) => err.status(),
            Self::Status(status) => Some(*status),
            Self::Body(_) => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, TransportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accessor() {
        let err = TransportError::Status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(format!("{err}"), "unexpected status: 500 Internal Server Error");
    }
}
