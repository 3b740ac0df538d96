//! bcrypt password hashing, run off the async executor

use crate::errors::{DomainError, DomainResult};

/// Hash `password` with a fresh salt at the given cost
pub async fn hash_password(password: &str, cost: u32) -> DomainResult<String> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| DomainError::internal(format!("password hashing task failed: {e}")))?
        .map_err(|e| DomainError::internal(format!("password hashing failed: {e}")))
}

/// Check `password` against a stored bcrypt hash
///
/// bcrypt compares digests in constant time.
pub async fn verify_password(password: &str, hash: &str) -> DomainResult<bool> {
    let password = password.to_owned();
    let hash = hash.to_owned();
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| DomainError::internal(format!("password check task failed: {e}")))?
        .map_err(|e| DomainError::internal(format!("stored password hash is unreadable: {e}")))
}
