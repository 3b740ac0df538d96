//! Main token service implementation

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::domain::value_objects::Identity;
use crate::errors::TokenError;

use super::config::TokenServiceConfig;

/// Service for issuing and validating JWT identity tokens
///
/// Holds only the signing keys, so one instance can be shared across
/// request handlers without synchronization.
pub struct TokenService {
    lifetime: Duration,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance from its configuration
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;

        Self {
            lifetime: Duration::days(config.expiry_days),
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a token for `identity`, expiring one lifetime from now
    pub fn issue(&self, identity: &Identity) -> Result<String, TokenError> {
        self.issue_at(identity, Utc::now())
    }

    /// Issues a token as if it had been minted at `issued_at`
    pub fn issue_at(
        &self,
        identity: &Identity,
        issued_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = Claims::new(identity, issued_at, self.lifetime);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign token");
            TokenError::GenerationFailed
        })
    }

    /// Verifies signature and expiry, returning the decoded claims
    ///
    /// # Returns
    ///
    /// * `Err(TokenError::InvalidSignature)` - Signed with another key or tampered
    /// * `Err(TokenError::Expired)` - Expiration instant has passed
    /// * `Err(TokenError::Malformed)` - Anything else that fails to decode
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })
    }

    /// Verifies a token and resolves the identity it carries
    pub fn validate(&self, token: &str) -> Result<Identity, TokenError> {
        self.verify(token)?.identity()
    }
}
