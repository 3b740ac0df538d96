//! Unit tests for mock favorite repository

use crate::domain::entities::favorite::NewFavorite;
use crate::repositories::favorite::{FavoriteRepository, MockFavoriteRepository};

fn new_favorite(title: &str, owner_id: Option<i64>) -> NewFavorite {
    NewFavorite {
        url: "https://example.com".to_string(),
        title: title.to_string(),
        description: None,
        likes: 0,
        owner_id,
    }
}

#[tokio::test]
async fn test_list_recent_is_newest_first() {
    let repo = MockFavoriteRepository::new();
    for title in ["first", "second", "third"] {
        repo.create(new_favorite(title, None)).await.unwrap();
    }

    let titles: Vec<String> = repo
        .list_recent(2, 0)
        .await
        .unwrap()
        .into_iter()
        .map(|f| f.title)
        .collect();
    assert_eq!(titles, vec!["third", "second"]);

    let rest = repo.list_recent(2, 2).await.unwrap();
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].title, "first");
    assert_eq!(repo.count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_delete_scoped_by_owner() {
    let repo = MockFavoriteRepository::new();
    let owned = repo.create(new_favorite("mine", Some(1))).await.unwrap();

    assert_eq!(repo.delete(owned.id, Some(2)).await.unwrap(), 0);
    assert_eq!(repo.delete(owned.id, Some(1)).await.unwrap(), 1);
    assert_eq!(repo.delete(owned.id, Some(1)).await.unwrap(), 0);
}

#[tokio::test]
async fn test_increment_missing_returns_none() {
    let repo = MockFavoriteRepository::new();
    assert!(repo.increment_likes(42).await.unwrap().is_none());
}
