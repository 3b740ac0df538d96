//! Token service module for JWT management
//!
//! Issues and validates HS256-signed identity tokens. Tokens are stateless:
//! there is no revocation list, a token stays valid until it expires.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
