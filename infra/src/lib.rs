//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Clicaki backend,
//! following Clean Architecture principles. It provides the SQLite-backed
//! implementations of the repository traits declared in `ck_core`.
//!
//! ## Architecture
//!
//! - **Database**: connection pool, embedded migrations and repositories
//!   built on SQLx

/// Database module - SQLite implementations using SQLx
pub mod database;

pub use database::{DatabasePool, SqliteFavoriteRepository, SqliteUserRepository};

/// Infrastructure-specific error types
///
/// Raised on startup paths (connecting, migrating). Repository calls report
/// failures as `DomainError` instead.
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
