//! Configuration for the token service

use ck_shared::config::JwtConfig;

use crate::domain::entities::token::TOKEN_EXPIRY_DAYS;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Token lifetime in days
    pub expiry_days: i64,
}

impl TokenServiceConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            expiry_days: TOKEN_EXPIRY_DAYS,
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            expiry_days: config.expiry_days,
        }
    }
}
