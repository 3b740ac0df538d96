//! SQLite implementation of the FavoriteRepository trait.
//!
//! Every mutation is a single statement: `created_at` is assigned inside the
//! insert, the like counter is bumped with `likes = likes + 1` and deletes
//! report the affected row count.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

use ck_core::domain::entities::favorite::{Favorite, NewFavorite};
use ck_core::errors::DomainError;
use ck_core::repositories::FavoriteRepository;

use super::{format_timestamp, parse_timestamp, store_error};

const FAVORITE_COLUMNS: &str = "id, url, title, description, likes, created_at, owner_id";

/// SQLite implementation of FavoriteRepository
pub struct SqliteFavoriteRepository {
    /// Database connection pool
    pool: SqlitePool,
}

impl SqliteFavoriteRepository {
    /// Create a new SQLite favorite repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Convert database row to Favorite entity
    fn row_to_favorite(row: &SqliteRow) -> Result<Favorite, DomainError> {
        let created_at: String = row
            .try_get("created_at")
            .map_err(|e| store_error("Failed to get created_at", e))?;

        Ok(Favorite {
            id: row
                .try_get("id")
                .map_err(|e| store_error("Failed to get id", e))?,
            url: row
                .try_get("url")
                .map_err(|e| store_error("Failed to get url", e))?,
            title: row
                .try_get("title")
                .map_err(|e| store_error("Failed to get title", e))?,
            description: row
                .try_get("description")
                .map_err(|e| store_error("Failed to get description", e))?,
            likes: row
                .try_get("likes")
                .map_err(|e| store_error("Failed to get likes", e))?,
            created_at: parse_timestamp(&created_at)?,
            owner_id: row
                .try_get("owner_id")
                .map_err(|e| store_error("Failed to get owner_id", e))?,
        })
    }

    fn rows_to_favorites(rows: Vec<SqliteRow>) -> Result<Vec<Favorite>, DomainError> {
        rows.iter().map(Self::row_to_favorite).collect()
    }
}

#[async_trait]
impl FavoriteRepository for SqliteFavoriteRepository {
    async fn create(&self, favorite: NewFavorite) -> Result<Favorite, DomainError> {
        // The write lock is held for the whole statement, so clamping to the
        // newest stored timestamp keeps created_at non-decreasing in id order.
        let query = format!(
            "INSERT INTO favorites (url, title, description, likes, created_at, owner_id) \
             VALUES (?, ?, ?, ?, \
                     MAX(?, COALESCE((SELECT MAX(created_at) FROM favorites), '')), ?) \
             RETURNING {FAVORITE_COLUMNS}"
        );

        let row = sqlx::query(&query)
            .bind(&favorite.url)
            .bind(&favorite.title)
            .bind(&favorite.description)
            .bind(favorite.likes)
            .bind(format_timestamp(Utc::now()))
            .bind(favorite.owner_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| store_error("Failed to insert favorite", e))?;

        Self::row_to_favorite(&row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Favorite>, DomainError> {
        let query = format!("SELECT {FAVORITE_COLUMNS} FROM favorites WHERE id = ?");

        let result = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_error("Failed to query favorite", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_favorite(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_recent(&self, limit: u32, offset: u64) -> Result<Vec<Favorite>, DomainError> {
        let query = format!(
            "SELECT {FAVORITE_COLUMNS} FROM favorites \
             ORDER BY created_at DESC, id DESC LIMIT ? OFFSET ?"
        );

        let offset = i64::try_from(offset)
            .map_err(|_| DomainError::store("Listing offset out of range"))?;

        let rows = sqlx::query(&query)
            .bind(i64::from(limit))
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| store_error("Failed to list favorites", e))?;

        Self::rows_to_favorites(rows)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM favorites")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| store_error("Failed to count favorites", e))?;

        Ok(total.max(0) as u64)
    }

    async fn list_by_owner(
        &self,
        owner_id: i64,
        limit: u32,
    ) -> Result<Vec<Favorite>, DomainError> {
        let query = format!(
            "SELECT {FAVORITE_COLUMNS} FROM favorites WHERE owner_id = ? \
             ORDER BY created_at DESC, id DESC LIMIT ?"
        );

        let rows = sqlx::query(&query)
            .bind(owner_id)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| store_error("Failed to list favorites by owner", e))?;

        Self::rows_to_favorites(rows)
    }

    async fn increment_likes(&self, id: i64) -> Result<Option<Favorite>, DomainError> {
        let query = format!(
            "UPDATE favorites SET likes = likes + 1 WHERE id = ? RETURNING {FAVORITE_COLUMNS}"
        );

        let result = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_error("Failed to increment likes", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_favorite(&row)?)),
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64, owner_id: Option<i64>) -> Result<u64, DomainError> {
        let result = match owner_id {
            Some(owner_id) => {
                sqlx::query("DELETE FROM favorites WHERE id = ? AND owner_id = ?")
                    .bind(id)
                    .bind(owner_id)
                    .execute(&self.pool)
                    .await
            }
            None => {
                sqlx::query("DELETE FROM favorites WHERE id = ?")
                    .bind(id)
                    .execute(&self.pool)
                    .await
            }
        }
        .map_err(|e| store_error("Failed to delete favorite", e))?;

        Ok(result.rows_affected())
    }
}
