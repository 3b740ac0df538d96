//! Database connection pool management
//!
//! This module provides database connection pooling using SQLx with SQLite,
//! including schema migrations and health checks.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use std::str::FromStr;
use std::time::Duration;

use ck_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// Database connection pool wrapper
///
/// Manages the SQLite connection pool with configurable settings
/// for connection limits and timeouts.
#[derive(Clone)]
pub struct DatabasePool {
    /// SQLx SQLite connection pool
    pool: SqlitePool,
}

impl DatabasePool {
    /// Create a new database connection pool
    ///
    /// An in-memory URL gets exactly one connection that is never recycled:
    /// every SQLite in-memory connection is its own database.
    ///
    /// # Example
    /// ```no_run
    /// use ck_infra::database::connection::DatabasePool;
    /// use ck_shared::config::DatabaseConfig;
    ///
    /// async fn create_pool() -> Result<DatabasePool, Box<dyn std::error::Error>> {
    ///     let pool = DatabasePool::new(DatabaseConfig::new("sqlite://clicaki.db")).await?;
    ///     pool.migrate().await?;
    ///     Ok(pool)
    /// }
    /// ```
    pub async fn new(config: DatabaseConfig) -> Result<Self, InfrastructureError> {
        let connect_options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| InfrastructureError::Config(format!("Invalid database URL: {}", e)))?
            .create_if_missing(true)
            .foreign_keys(true);

        let in_memory = config.is_in_memory();
        let max_connections = if in_memory { 1 } else { config.max_connections };

        tracing::info!(
            in_memory,
            max_connections,
            "Creating database connection pool"
        );

        let mut options = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.connect_timeout));

        options = if in_memory {
            options.idle_timeout(None).max_lifetime(None)
        } else {
            options
                .idle_timeout(Duration::from_secs(600))
                .max_lifetime(Duration::from_secs(1800))
        };

        let pool = options.connect_with(connect_options).await.map_err(|e| {
            tracing::error!("Failed to create database pool: {}", e);
            InfrastructureError::Database(e)
        })?;

        tracing::info!("Database connection pool created successfully");

        Ok(Self { pool })
    }

    /// Create a pool and apply migrations when the config asks for it
    pub async fn connect(config: DatabaseConfig) -> Result<Self, InfrastructureError> {
        let run_migrations = config.run_migrations;
        let pool = Self::new(config).await?;
        if run_migrations {
            pool.migrate().await?;
        }
        Ok(pool)
    }

    /// Fresh migrated in-memory database
    pub async fn in_memory() -> Result<Self, InfrastructureError> {
        Self::connect(DatabaseConfig::in_memory()).await
    }

    /// Get a reference to the underlying SQLx pool
    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Apply the embedded schema migrations
    pub async fn migrate(&self) -> Result<(), InfrastructureError> {
        tracing::info!("Running database migrations");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Database migrations completed");
        Ok(())
    }

    /// Check if the database connection is healthy
    ///
    /// Performs a simple query to verify connectivity.
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        tracing::debug!("Performing database health check");

        let result = sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Database health check failed: {}", e);
                InfrastructureError::Database(e)
            })?;

        let value: i64 = result.try_get(0)?;

        if value == 1 {
            tracing::debug!("Database health check passed");
            Ok(true)
        } else {
            tracing::warn!("Database health check returned unexpected value: {}", value);
            Ok(false)
        }
    }

    /// Close all connections in the pool
    ///
    /// This should be called during application shutdown.
    pub async fn close(&self) {
        tracing::info!("Closing database connection pool");
        self.pool.close().await;
        tracing::info!("Database connection pool closed");
    }
}
