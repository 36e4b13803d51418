//! Error types for the bookstore API client.
//!
//! # Design
//! Non-2xx statuses are not errors here: clients hand back the raw
//! `HttpResponse` and callers decide which codes they accept. Only faults
//! that leave no usable response, or bodies that cannot be encoded or
//! decoded, become an `ApiError`.

use thiserror::Error;

/// Errors returned by `ResourceClient` operations and `HttpResponse::json`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a readable response (connect, TLS, I/O).
    #[error("transport failed: {0}")]
    Transport(#[from] ureq::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_detail() {
        let err = ApiError::Deserialization("expected value at line 1".to_string());
        assert_eq!(err.to_string(), "deserialization failed: expected value at line 1");
    }
}
