//! SQLite implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

use ck_core::domain::entities::user::{NewUser, User};
use ck_core::errors::{AuthError, DomainError};
use ck_core::repositories::UserRepository;

use super::{format_timestamp, parse_timestamp, store_error};

const USER_COLUMNS: &str = "id, name, email, password_hash, created_at";

/// SQLite implementation of UserRepository
pub struct SqliteUserRepository {
    /// Database connection pool
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new SQLite user repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &SqliteRow) -> Result<User, DomainError> {
        let created_at: String = row
            .try_get("created_at")
            .map_err(|e| store_error("Failed to get created_at", e))?;

        Ok(User {
            id: row
                .try_get("id")
                .map_err(|e| store_error("Failed to get id", e))?,
            name: row
                .try_get("name")
                .map_err(|e| store_error("Failed to get name", e))?,
            email: row
                .try_get("email")
                .map_err(|e| store_error("Failed to get email", e))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| store_error("Failed to get password_hash", e))?,
            created_at: parse_timestamp(&created_at)?,
        })
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let query = format!(
            "INSERT INTO users (name, email, password_hash, created_at) \
             VALUES (?, ?, ?, ?) RETURNING {USER_COLUMNS}"
        );

        let row = sqlx::query(&query)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(format_timestamp(Utc::now()))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_unique_violation() {
                        return DomainError::from(AuthError::EmailAlreadyRegistered);
                    }
                }
                store_error("Failed to insert user", e)
            })?;

        Self::row_to_user(&row)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = ? LIMIT 1");

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_error("Failed to query user by email", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ? LIMIT 1");

        let result = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_error("Failed to query user by id", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }
}
