//! User repository trait defining the interface for account persistence.
//!
//! The trait is async-first; implementations translate store failures into
//! [`DomainError::StoreUnavailable`] and uniqueness violations on the email
//! column into [`AuthError::EmailAlreadyRegistered`](crate::errors::AuthError).

use async_trait::async_trait;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use ck_core::domain::entities::user::{NewUser, User};
/// use ck_core::errors::DomainError;
/// use ck_core::repositories::UserRepository;
///
/// struct SqliteUserRepository {
///     // connection pool
/// }
///
/// #[async_trait]
/// impl UserRepository for SqliteUserRepository {
///     async fn create(&self, user: NewUser) -> Result<User, DomainError> {
///         unimplemented!()
///     }
///
///     async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
///         Ok(None)
///     }
///
///     async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
///         Ok(None)
///     }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user
    ///
    /// Uniqueness of the email must be enforced atomically by the store, so
    /// that two concurrent registrations with one email produce exactly one
    /// account.
    ///
    /// # Returns
    /// * `Ok(User)` - The created user with its generated id and timestamp
    /// * `Err(DomainError::Auth(EmailAlreadyRegistered))` - Email taken
    /// * `Err(DomainError)` - Store failure
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;

    /// Find a user by normalized email
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with this email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by identifier
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;
}
