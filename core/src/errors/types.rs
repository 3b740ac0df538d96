//! Domain-specific error types for authentication, tokens and input validation
//!
//! Messages are safe to show to API callers; none of them embed secrets.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("A user with this email already exists")]
    EmailAlreadyRegistered,

    #[error("Email not found")]
    UserNotFound,

    #[error("Invalid password")]
    InvalidCredentials,
}

/// Token-related errors
///
/// Every variant collapses to the same "unauthorized" response at the HTTP
/// boundary; the variants stay distinct for callers that care about expiry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token not provided")]
    MissingToken,

    #[error("Invalid token format")]
    Malformed,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token expired")]
    Expired,

    #[error("Token generation failed")]
    GenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid URL: {value}")]
    InvalidUrl { value: String },

    #[error("Field {field} is too long (max: {max}, actual: {actual})")]
    TooLong {
        field: String,
        max: usize,
        actual: usize,
    },

    #[error("Invalid page number: {page}")]
    InvalidPage { page: i64 },

    #[error("Likes cannot be negative: {value}")]
    NegativeLikes { value: i64 },
}

impl ValidationError {
    /// Shorthand for [`ValidationError::RequiredField`]
    pub fn required(field: impl Into<String>) -> Self {
        Self::RequiredField {
            field: field.into(),
        }
    }
}
