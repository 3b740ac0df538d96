//! Favorite repository trait defining the interface for bookmark persistence.

use async_trait::async_trait;

use crate::domain::entities::favorite::{Favorite, NewFavorite};
use crate::errors::DomainError;

/// Repository trait for Favorite entity persistence operations
///
/// Listing methods order by `created_at` descending, ties broken by `id`
/// descending, so pagination is deterministic.
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Insert a favorite; the store assigns `id` and `created_at`
    async fn create(&self, favorite: NewFavorite) -> Result<Favorite, DomainError>;

    /// Find a favorite by identifier
    async fn find_by_id(&self, id: i64) -> Result<Option<Favorite>, DomainError>;

    /// Most recent favorites, skipping `offset` and returning at most `limit`
    async fn list_recent(&self, limit: u32, offset: u64) -> Result<Vec<Favorite>, DomainError>;

    /// Total number of stored favorites
    async fn count(&self) -> Result<u64, DomainError>;

    /// Most recent favorites owned by `owner_id`, at most `limit`
    async fn list_by_owner(&self, owner_id: i64, limit: u32)
        -> Result<Vec<Favorite>, DomainError>;

    /// Atomically add one like
    ///
    /// Concurrent calls must never lose an update: N successful calls raise
    /// the counter by exactly N.
    ///
    /// # Returns
    /// * `Ok(Some(Favorite))` - The favorite after the increment
    /// * `Ok(None)` - No favorite with this id
    async fn increment_likes(&self, id: i64) -> Result<Option<Favorite>, DomainError>;

    /// Delete a favorite, optionally only when owned by `owner_id`
    ///
    /// # Returns
    /// * `Ok(1)` - Row removed
    /// * `Ok(0)` - Nothing matched (absent, or owned by someone else)
    async fn delete(&self, id: i64, owner_id: Option<i64>) -> Result<u64, DomainError>;
}
