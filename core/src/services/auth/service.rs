//! Main authentication service implementation

use std::sync::Arc;

use ck_shared::validation::{is_valid_email, max_chars, normalize_email, not_blank};

use crate::domain::entities::user::{NewUser, User, EMAIL_MAX_LEN, NAME_MAX_LEN};
use crate::domain::value_objects::Identity;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;
use super::password::{hash_password, verify_password};

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Signed identity token for the `Token` header
    pub token: String,
    /// The authenticated account
    pub identity: Identity,
}

/// Authentication service managing accounts and credentials
pub struct AuthService<U>
where
    U: UserRepository,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U> AuthService<U>
where
    U: UserRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `token_service` - Service for JWT token management
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            config,
        }
    }

    /// Register a new account
    ///
    /// The email is normalized before validation. Uniqueness is decided by the
    /// store at insert time, never by a lookup beforehand.
    ///
    /// # Returns
    ///
    /// * `Ok(Identity)` - The created account, without its password hash
    /// * `Err(DomainError::Validation)` - Blank name/password or bad email
    /// * `Err(DomainError::Auth(EmailAlreadyRegistered))` - Email taken
    pub async fn register(&self, name: &str, email: &str, password: &str) -> DomainResult<Identity> {
        let name = name.trim();
        let email = normalize_email(email);

        if !not_blank(name) {
            return Err(ValidationError::required("name").into());
        }
        if !max_chars(name, NAME_MAX_LEN) {
            return Err(too_long("name", NAME_MAX_LEN, name).into());
        }
        if email.is_empty() {
            return Err(ValidationError::required("email").into());
        }
        if !max_chars(&email, EMAIL_MAX_LEN) {
            return Err(too_long("email", EMAIL_MAX_LEN, &email).into());
        }
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        if password.is_empty() {
            return Err(ValidationError::required("password").into());
        }

        let password_hash = hash_password(password, self.config.bcrypt_cost).await?;

        let user = match self
            .user_repository
            .create(NewUser {
                name: name.to_string(),
                email: email.clone(),
                password_hash,
            })
            .await
        {
            Ok(user) => user,
            Err(DomainError::Auth(AuthError::EmailAlreadyRegistered)) => {
                tracing::warn!(email = %email, "Registration rejected: email already registered");
                return Err(AuthError::EmailAlreadyRegistered.into());
            }
            Err(e) => return Err(e),
        };

        tracing::info!(user_id = user.id, email = %user.email, "User registered");
        Ok(user.identity())
    }

    /// Check credentials and return the full stored account
    ///
    /// # Returns
    ///
    /// * `Err(DomainError::Auth(UserNotFound))` - No account with this email
    /// * `Err(DomainError::Auth(InvalidCredentials))` - Password mismatch
    pub async fn authenticate(&self, email: &str, password: &str) -> DomainResult<User> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(ValidationError::required("email").into());
        }
        if password.is_empty() {
            return Err(ValidationError::required("password").into());
        }

        let user = self
            .user_repository
            .find_by_email(&email)
            .await?
            .ok_or_else(|| {
                tracing::warn!(email = %email, "Login rejected: unknown email");
                AuthError::UserNotFound
            })?;

        if !verify_password(password, &user.password_hash).await? {
            tracing::warn!(user_id = user.id, "Login rejected: wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Authenticate and mint a token for the account
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<LoginOutcome> {
        let identity = self.authenticate(email, password).await?.identity();
        let token = self.token_service.issue(&identity)?;

        tracing::info!(user_id = identity.id, "User logged in");
        Ok(LoginOutcome { token, identity })
    }

    /// Look up an account by id
    pub async fn find_by_id(&self, id: i64) -> DomainResult<Identity> {
        self.user_repository
            .find_by_id(id)
            .await?
            .map(|user| user.identity())
            .ok_or_else(|| DomainError::not_found("User"))
    }
}

fn too_long(field: &str, max: usize, value: &str) -> ValidationError {
    ValidationError::TooLong {
        field: field.to_string(),
        max,
        actual: value.chars().count(),
    }
}
