//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from common error types to [`AppError`].
//! Both conversions land in [`ErrorKind::Storage`]: they only occur while
//! reading or writing persisted client state.

use super::app_error::AppError;
use super::kind::ErrorKind;

// ============================================================================
// Standard library conversions
// ============================================================================

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        let message = match err.kind() {
            std::io::ErrorKind::NotFound => "Storage location not found",
            std::io::ErrorKind::PermissionDenied => "Storage location is not accessible",
            _ => "I/O operation failed",
        };
        AppError::new(ErrorKind::Storage, message).with_source(err)
    }
}

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() || err.is_eof() {
            AppError::storage(format!("Stored data is not valid JSON: {}", err)).with_source(err)
        } else {
            AppError::storage("JSON serialization error").with_source(err)
        }
    }
}
