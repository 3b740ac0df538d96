//! Authentication service module
//!
//! Account registration, credential checks and login. Passwords are hashed
//! with bcrypt; successful logins are exchanged for a signed token.

mod config;
mod password;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use password::{hash_password, verify_password};
pub use service::{AuthService, LoginOutcome};
