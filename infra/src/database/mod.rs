//! Database module - SQLite implementations using SQLx
//!
//! This module provides the database access layer:
//! - Connection pool management
//! - Embedded schema migrations
//! - Repository implementations

pub mod connection;
pub mod sqlite;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::DatabasePool;
pub use sqlite::{SqliteFavoriteRepository, SqliteUserRepository};
