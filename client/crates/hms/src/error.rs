//! Client Error Types
//!
//! This module provides the client-side error variants. HTTP failures keep
//! their status and parsed body; storage failures wrap the unified
//! `kernel::error::AppError`.

use std::fmt;

use kernel::error::{app_error::AppError, kind::ErrorKind};
use serde_json::Value;
use thiserror::Error;

/// Client result type alias
pub type ClientResult<T> = Result<T, ClientError>;

/// Fallback message when neither the body nor the status line explains a failure
pub const GENERIC_FAILURE: &str = "Request failed";

/// Non-success HTTP response
#[derive(Debug, Clone, PartialEq)]
pub struct RequestError {
    /// Numeric HTTP status
    pub status: u16,
    /// Best-effort human-readable message
    pub message: String,
    /// Full parsed response body, for caller inspection
    pub body: Value,
}

impl RequestError {
    /// Build from a failed response
    ///
    /// The message is the first usable value among `body.error`,
    /// `body.message`, `body.raw`, the status text, then [`GENERIC_FAILURE`].
    pub fn from_response(status: u16, status_text: Option<&str>, body: Value) -> Self {
        let message = failure_message(&body, status_text);
        Self {
            status,
            message,
            body,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        ErrorKind::from_status(self.status)
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for RequestError {}

/// Derive the user-facing message for a failed response
pub fn failure_message(body: &Value, status_text: Option<&str>) -> String {
    ["error", "message", "raw"]
        .iter()
        .find_map(|field| present_text(body.get(field)))
        .or_else(|| {
            status_text
                .filter(|text| !text.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}

/// Text of a field that carries a value (null, false, 0 and "" do not)
fn present_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// Client error variants
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (DNS, connection refused, reset)
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status
    #[error("{0}")]
    Request(#[from] RequestError),

    /// Required input missing; detected before any network call
    #[error("{0}")]
    Validation(String),

    /// Persistent storage failure
    #[error("{}", .0.message())]
    Storage(#[from] AppError),

    /// Request body could not be encoded
    #[error("Could not encode request body: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Header value rejected (e.g. stored token with control characters)
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),
}

impl ClientError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Network(_) => ErrorKind::Transport,
            ClientError::Request(e) => e.kind(),
            ClientError::Validation(_) => ErrorKind::Validation,
            ClientError::Storage(e) => e.kind(),
            ClientError::Serialization(_) | ClientError::InvalidHeader(_) => {
                ErrorKind::BadRequest
            }
        }
    }

    /// HTTP status, when the backend answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Request(e) => Some(e.status),
            _ => None,
        }
    }

    /// Parsed response body, when the backend answered
    pub fn body(&self) -> Option<&Value> {
        match self {
            ClientError::Request(e) => Some(&e.body),
            _ => None,
        }
    }

    /// Log the error with appropriate level
    pub fn report(&self, context: &str) {
        let kind = self.kind();
        match self {
            ClientError::Network(msg) => {
                tracing::warn!(context, error = %msg, "Backend unreachable");
            }
            ClientError::Storage(e) => {
                tracing::error!(context, error = ?e, "Storage failure");
            }
            ClientError::Request(e) if kind.is_server_error() => {
                tracing::error!(context, status = e.status, error = %e, "Backend error");
            }
            ClientError::Request(e) if kind.is_auth_rejection() => {
                tracing::warn!(context, status = e.status, error = %e, "Backend rejected credentials");
            }
            _ => {
                tracing::debug!(context, kind = %kind, error = %self, "Request not completed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_prefers_error_field() {
        let body = json!({"error": "Email taken", "message": "ignored", "raw": "ignored"});
        assert_eq!(failure_message(&body, Some("Conflict")), "Email taken");
    }

    #[test]
    fn test_message_falls_back_in_order() {
        let body = json!({"message": "Bad password"});
        assert_eq!(failure_message(&body, Some("Unauthorized")), "Bad password");

        let body = json!({"raw": "<html>oops</html>"});
        assert_eq!(failure_message(&body, Some("Bad Gateway")), "<html>oops</html>");

        let body = json!({"detail": "unrelated"});
        assert_eq!(failure_message(&body, Some("Not Found")), "Not Found");

        assert_eq!(failure_message(&Value::Null, None), GENERIC_FAILURE);
        assert_eq!(failure_message(&Value::Null, Some("")), GENERIC_FAILURE);
    }

    #[test]
    fn test_message_skips_empty_values() {
        let body = json!({"error": "", "message": null, "raw": "fallback"});
        assert_eq!(failure_message(&body, None), "fallback");

        let body = json!({"error": false, "message": 0});
        assert_eq!(failure_message(&body, Some("Teapot")), "Teapot");
    }

    #[test]
    fn test_message_non_string_error_is_serialized() {
        let body = json!({"error": {"code": 7}});
        assert_eq!(failure_message(&body, None), r#"{"code":7}"#);
    }

    #[test]
    fn test_message_ignores_non_object_bodies() {
        let body = json!(["error", "message"]);
        assert_eq!(failure_message(&body, Some("Bad Request")), "Bad Request");
    }

    #[test]
    fn test_request_error_keeps_status_and_body() {
        let body = json!({"error": "nope"});
        let err = ClientError::from(RequestError::from_response(403, Some("Forbidden"), body.clone()));

        assert_eq!(err.to_string(), "nope");
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.body(), Some(&body));
        assert_eq!(err.kind(), ErrorKind::Forbidden);
    }

    #[test]
    fn test_network_error_display() {
        let err = ClientError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.status(), None);
        assert!(err.body().is_none());
    }

    #[test]
    fn test_storage_error_display_uses_message() {
        let err = ClientError::from(AppError::storage("Disk full"));
        assert_eq!(err.to_string(), "Disk full");
        assert_eq!(err.kind(), ErrorKind::Storage);
    }
}
