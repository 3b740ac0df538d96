//! Unit tests for mock user repository

use crate::domain::entities::user::NewUser;
use crate::errors::{AuthError, DomainError};
use crate::repositories::user::{MockUserRepository, UserRepository};

fn new_user(email: &str) -> NewUser {
    NewUser {
        name: "Test".to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
    }
}

#[tokio::test]
async fn test_mock_repository_create_and_find() {
    let repo = MockUserRepository::new();

    let created = repo.create(new_user("a@example.com")).await.unwrap();
    assert_eq!(created.id, 1);

    let by_id = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(by_id.unwrap().email, "a@example.com");

    let by_email = repo.find_by_email("a@example.com").await.unwrap();
    assert_eq!(by_email.unwrap().id, created.id);

    assert!(repo.find_by_email("missing@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_mock_repository_rejects_duplicate_email() {
    let repo = MockUserRepository::new();
    repo.create(new_user("dup@example.com")).await.unwrap();

    let err = repo.create(new_user("dup@example.com")).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::EmailAlreadyRegistered)
    ));
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_mock_repository_unavailable() {
    let repo = MockUserRepository::new();
    repo.set_unavailable(true);

    let err = repo.find_by_id(1).await.unwrap_err();
    assert!(matches!(err, DomainError::StoreUnavailable { .. }));
}
