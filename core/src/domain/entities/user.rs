//! User entity representing a registered account.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::domain::value_objects::Identity;

/// Maximum display name length in characters
pub const NAME_MAX_LEN: usize = 250;

/// Maximum email length in characters
pub const EMAIL_MAX_LEN: usize = 320;

/// Registered user as stored, including the password hash
///
/// Never serialized; use [`User::identity`] for anything leaving the core.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    /// Store-generated identifier
    pub id: i64,

    /// Display name
    pub name: String,

    /// Unique, normalized email address
    pub email: String,

    /// bcrypt hash of the password
    pub password_hash: String,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Hash-free view used for responses and token issuance
    pub fn identity(&self) -> Identity {
        Identity::new(self.id, self.name.clone(), self.email.clone())
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Validated registration data ready for insertion
#[derive(Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}
