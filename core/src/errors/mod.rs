//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::{AuthError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors
///
/// Expected outcomes such as "no row matched" surface as explicit variants;
/// nothing here is used for control flow inside the services.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("Store unavailable: {message}")]
    StoreUnavailable { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DomainError {
    /// Create a not-found error for the named resource
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Wrap a persistence failure
    pub fn store(message: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
        }
    }

    /// Wrap a failure that is neither the caller's nor the store's fault
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether the error means "no matching record"
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DomainError::NotFound { .. } | DomainError::Auth(AuthError::UserNotFound)
        )
    }

    /// Whether the error is one of the token failures that map to "unauthorized"
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, DomainError::Token(_))
    }

    /// Whether the error was caused by caller input
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, DomainError::Validation(_))
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
