//! Token claims for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Identity;
use crate::errors::TokenError;

/// Token lifetime (30 days)
pub const TOKEN_EXPIRY_DAYS: i64 = 30;

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Display name at issuance
    pub name: String,

    /// Email at issuance
    pub email: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims for `identity`, expiring `lifetime` after `issued_at`
    pub fn new(identity: &Identity, issued_at: DateTime<Utc>, lifetime: Duration) -> Self {
        Self {
            sub: identity.id.to_string(),
            name: identity.name.clone(),
            email: identity.email.clone(),
            iat: issued_at.timestamp(),
            exp: (issued_at + lifetime).timestamp(),
        }
    }

    /// Rebuilds the identity carried by the claims
    pub fn identity(&self) -> Result<Identity, TokenError> {
        let id = self.sub.parse::<i64>().map_err(|_| TokenError::Malformed)?;
        Ok(Identity::new(id, self.name.clone(), self.email.clone()))
    }
}
