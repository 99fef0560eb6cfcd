//! Error types for the webstate utilities
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Api Error Enum ==
/// Unified error type for the HTTP client.
///
/// Every failure mode of an outbound call is translated into one of a small,
/// fixed set of human-readable messages suitable for direct display.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server rejected the request data (HTTP 400)
    #[error("Bad request. Please check your input.")]
    BadRequest,

    /// Missing or invalid credentials (HTTP 401)
    #[error("Unauthorized. Please log in.")]
    Unauthorized,

    /// Authenticated but not allowed (HTTP 403)
    #[error("Forbidden. You do not have permission.")]
    Forbidden,

    /// The requested resource does not exist (HTTP 404)
    #[error("Resource not found.")]
    NotFound,

    /// The server failed to process the request (HTTP 500)
    #[error("Server error. Please try again later.")]
    ServerError,

    /// Any other HTTP status code
    #[error("Error: {0}")]
    Status(u16),

    /// The request was attempted but no response was received
    #[error("Network error. Please check your connection.")]
    Network,

    /// Anything else: request construction, body encoding, response decoding
    #[error("Request failed. Please try again.")]
    Request,

    /// The call was cancelled via its cancellation token
    #[error("Request cancelled.")]
    Cancelled,
}

impl ApiError {
    // == From Status ==
    /// Maps an HTTP status code to its fixed user-facing message.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => ApiError::BadRequest,
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound,
            500 => ApiError::ServerError,
            other => ApiError::Status(other),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    /// Translates a transport-level error into the fixed message set.
    ///
    /// A response with an error status maps per status code; an attempted
    /// request with no response (connect failure, timeout) maps to the network
    /// message; everything else maps to the generic request failure.
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return ApiError::from_status(status.as_u16());
        }
        if err.is_connect() || err.is_timeout() {
            return ApiError::Network;
        }
        ApiError::Request
    }
}

// == Store Error Enum ==
/// Error type for the persistent key-value store.
///
/// These never reach callers of `PersistentState`; they are logged at the
/// point of failure and the in-memory value wins.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the backing medium failed
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Value could not be serialized or deserialized
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backing store is unavailable (e.g. poisoned lock)
    #[error("storage unavailable")]
    Unavailable,
}

// == Result Type Alias ==
/// Convenience Result type for HTTP client operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping_known_codes() {
        assert_eq!(ApiError::from_status(400), ApiError::BadRequest);
        assert_eq!(ApiError::from_status(401), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(403), ApiError::Forbidden);
        assert_eq!(ApiError::from_status(404), ApiError::NotFound);
        assert_eq!(ApiError::from_status(500), ApiError::ServerError);
    }

    #[test]
    fn test_status_mapping_fallback() {
        assert_eq!(ApiError::from_status(418), ApiError::Status(418));
        assert_eq!(ApiError::from_status(418).to_string(), "Error: 418");
    }

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(ApiError::NotFound.to_string(), "Resource not found.");
        assert_eq!(
            ApiError::Network.to_string(),
            "Network error. Please check your connection."
        );
        assert_eq!(
            ApiError::Request.to_string(),
            "Request failed. Please try again."
        );
    }
}
