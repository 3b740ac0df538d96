//! Unit tests for database connection pool

use ck_shared::config::DatabaseConfig;

use crate::database::connection::DatabasePool;
use crate::InfrastructureError;

#[tokio::test]
async fn test_pool_creation_with_unreachable_path() {
    let result = DatabasePool::new(DatabaseConfig::new("sqlite://missing-dir/nested/clicaki.db")).await;
    assert!(matches!(result, Err(InfrastructureError::Database(_))));
}

#[tokio::test]
async fn test_in_memory_pool_is_healthy_and_single_connection() {
    let pool = DatabasePool::in_memory().await.unwrap();

    assert!(pool.health_check().await.unwrap());
    assert_eq!(pool.get_pool().options().get_max_connections(), 1);
}

#[tokio::test]
async fn test_closed_pool_is_unhealthy() {
    let pool = DatabasePool::in_memory().await.unwrap();
    pool.close().await;

    assert!(matches!(
        pool.health_check().await,
        Err(InfrastructureError::Database(_))
    ));
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let pool = DatabasePool::in_memory().await.unwrap();
    pool.migrate().await.unwrap();

    let tables: Vec<(String,)> = sqlx::query_as(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('users', 'favorites') ORDER BY name",
    )
    .fetch_all(pool.get_pool())
    .await
    .unwrap();
    let names: Vec<&str> = tables.iter().map(|(n,)| n.as_str()).collect();
    assert_eq!(names, vec!["favorites", "users"]);
}
