//! Shared error response structure

use serde::{Deserialize, Serialize};

/// Error body returned by every API endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

/// Common error codes used across the application
pub mod error_codes {
    pub const INVALID_INPUT: &str = "INVALID_INPUT";
    pub const DUPLICATE_EMAIL: &str = "DUPLICATE_EMAIL";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const INVALID_CREDENTIAL: &str = "INVALID_CREDENTIAL";
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const STORE_UNAVAILABLE: &str = "STORE_UNAVAILABLE";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}
