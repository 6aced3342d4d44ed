//! Error Taxonomy
//!
//! Failures surfaced by the API client. The client never retries or
//! swallows: every variant propagates to the initiating view.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a usable HTTP response.
    #[error("request failed: {0}")]
    Transport(String),

    /// Non-success status with no usable error body; carries the
    /// per-operation generic message.
    #[error("{0}")]
    Failed(&'static str),

    /// Non-success status with a structured `{error}` body; the server's
    /// message is passed through verbatim.
    #[error("{0}")]
    Server(String),

    /// 404 on the purchase/unpurchase sub-resources.
    #[error("{0}")]
    NotFound(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_is_verbatim() {
        let err = ApiError::Server("list not found".to_string());
        assert_eq!(err.to_string(), "list not found");
    }

    #[test]
    fn test_generic_message_is_operation_specific() {
        let err = ApiError::Failed("Failed to create grocery list");
        assert_eq!(err.to_string(), "Failed to create grocery list");
    }

    #[test]
    fn test_transport_wraps_cause() {
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "request failed: connection refused");
    }
}
