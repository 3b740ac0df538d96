//! Shared utilities and common types for the Clicaki server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types and layered loading
//! - Error response structures
//! - Pagination math for list endpoints
//! - Input validators (email, URL, lengths)

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use crate::config::{
    AppConfig, AuthConfig, ConfigLoadError, CorsConfig, DatabaseConfig, Environment,
    FavoritesConfig, JwtConfig, LogFormat, LoggingConfig, PasswordConfig, ServerConfig,
};
pub use crate::errors::{error_codes, ErrorResponse};
pub use crate::types::{Pagination, DEFAULT_PAGE_SIZE};
pub use crate::utils::validation;
