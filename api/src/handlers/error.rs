//! Mapping of domain errors onto HTTP responses
//!
//! Every failure leaves the API as `{"error": CODE, "message": text}`. Store
//! and internal failures are logged in full and answered with a generic
//! message.

use actix_web::{error::JsonPayloadError, error::QueryPayloadError, http::StatusCode};
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use validator::ValidationErrors;

use ck_core::errors::{AuthError, DomainError, TokenError};
use ck_shared::{error_codes, ErrorResponse};

/// Error returned by request handlers and the authorization gate
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    /// Malformed or invalid caller input
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error_codes::INVALID_INPUT, message)
    }

    /// Missing, malformed, forged or expired token
    pub fn unauthorized() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            error_codes::UNAUTHORIZED,
            "Unauthorized: a valid Token header is required",
        )
    }

    /// Unexpected server-side failure
    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            "An internal error occurred",
        )
    }

    /// Registration reports invalid input as `403 Forbidden`
    pub fn for_registration(error: DomainError) -> Self {
        Self::from(error).input_forbidden()
    }

    /// Re-status an invalid-input error as `403`; other errors pass through
    pub fn input_forbidden(self) -> Self {
        if self.code == error_codes::INVALID_INPUT {
            Self {
                status: StatusCode::FORBIDDEN,
                ..self
            }
        } else {
            self
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        match &error {
            DomainError::Validation(e) => Self::bad_request(e.to_string()),
            DomainError::NotFound { .. } => {
                Self::new(StatusCode::NOT_FOUND, error_codes::NOT_FOUND, error.to_string())
            }
            DomainError::Auth(AuthError::EmailAlreadyRegistered) => Self::new(
                StatusCode::CONFLICT,
                error_codes::DUPLICATE_EMAIL,
                error.to_string(),
            ),
            DomainError::Auth(AuthError::UserNotFound) => {
                Self::new(StatusCode::NOT_FOUND, error_codes::NOT_FOUND, error.to_string())
            }
            DomainError::Auth(AuthError::InvalidCredentials) => Self::new(
                StatusCode::CONFLICT,
                error_codes::INVALID_CREDENTIAL,
                error.to_string(),
            ),
            DomainError::Token(TokenError::GenerationFailed) => {
                tracing::error!(error = %error, "Token generation failed");
                Self::internal()
            }
            DomainError::Token(e) => {
                tracing::debug!(reason = %e, "Rejected token");
                Self::unauthorized()
            }
            DomainError::StoreUnavailable { .. } => {
                tracing::error!(error = %error, "Store failure");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    error_codes::STORE_UNAVAILABLE,
                    "The data store is unavailable",
                )
            }
            DomainError::Internal { .. } => {
                tracing::error!(error = %error, "Internal failure");
                Self::internal()
            }
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(error: TokenError) -> Self {
        DomainError::from(error).into()
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors.field_errors().keys().map(|k| k.to_string()).collect();
        fields.sort_unstable();
        Self::bad_request(format!("Invalid fields: {}", fields.join(", ")))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status).json(ErrorResponse::new(self.code, &self.message))
    }
}

/// Error handler for `web::JsonConfig`
pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %error, "Rejected JSON body");
    ApiError::bad_request(format!("Invalid JSON body: {error}")).into()
}

/// Error handler for the `/register` body: unreadable input is `403` there
pub fn registration_json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %error, "Rejected registration body");
    ApiError::bad_request(format!("Invalid JSON body: {error}"))
        .input_forbidden()
        .into()
}

/// Error handler for `web::QueryConfig`
pub fn query_error_handler(error: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %error, "Rejected query string");
    ApiError::bad_request(format!("Invalid query string: {error}")).into()
}
