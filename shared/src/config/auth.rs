//! Authentication configuration: token signing and password hashing

use serde::{Deserialize, Serialize};

/// Secret shipped for local development only; production refuses it
pub const DEVELOPMENT_JWT_SECRET: &str = "development-secret-please-change-in-production";

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Symmetric key used for HS256 signing
    pub secret: String,

    /// Token lifetime in days
    #[serde(default = "default_expiry_days")]
    pub expiry_days: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEVELOPMENT_JWT_SECRET),
            expiry_days: default_expiry_days(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEVELOPMENT_JWT_SECRET
    }
}

/// Password hashing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PasswordConfig {
    /// bcrypt work factor
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl PasswordConfig {
    /// Lowest cost bcrypt accepts
    pub const MIN_COST: u32 = 4;
    /// Highest cost bcrypt accepts
    pub const MAX_COST: u32 = 31;
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    #[serde(default)]
    pub jwt: JwtConfig,

    /// Password hashing configuration
    #[serde(default)]
    pub password: PasswordConfig,
}

fn default_expiry_days() -> i64 {
    30
}

fn default_bcrypt_cost() -> u32 {
    12
}
