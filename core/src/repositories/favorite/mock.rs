//! Mock implementation of FavoriteRepository for testing

use async_trait::async_trait;
use chrono::Utc;
use std::cmp::Reverse;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::favorite::{Favorite, NewFavorite};
use crate::errors::DomainError;

use super::trait_::FavoriteRepository;

#[derive(Default)]
struct Store {
    next_id: i64,
    favorites: Vec<Favorite>,
}

impl Store {
    fn sorted(&self) -> Vec<&Favorite> {
        let mut all: Vec<&Favorite> = self.favorites.iter().collect();
        all.sort_by_key(|f| Reverse((f.created_at, f.id)));
        all
    }
}

/// Mock favorite repository for testing
#[derive(Default)]
pub struct MockFavoriteRepository {
    store: Arc<RwLock<Store>>,
}

impl MockFavoriteRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FavoriteRepository for MockFavoriteRepository {
    async fn create(&self, favorite: NewFavorite) -> Result<Favorite, DomainError> {
        let mut store = self.store.write().await;
        store.next_id += 1;

        let created = Favorite {
            id: store.next_id,
            url: favorite.url,
            title: favorite.title,
            description: favorite.description,
            likes: favorite.likes,
            created_at: Utc::now(),
            owner_id: favorite.owner_id,
        };
        store.favorites.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Favorite>, DomainError> {
        let store = self.store.read().await;
        Ok(store.favorites.iter().find(|f| f.id == id).cloned())
    }

    async fn list_recent(&self, limit: u32, offset: u64) -> Result<Vec<Favorite>, DomainError> {
        let store = self.store.read().await;
        Ok(store
            .sorted()
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.store.read().await.favorites.len() as u64)
    }

    async fn list_by_owner(
        &self,
        owner_id: i64,
        limit: u32,
    ) -> Result<Vec<Favorite>, DomainError> {
        let store = self.store.read().await;
        Ok(store
            .sorted()
            .into_iter()
            .filter(|f| f.is_owned_by(owner_id))
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn increment_likes(&self, id: i64) -> Result<Option<Favorite>, DomainError> {
        let mut store = self.store.write().await;
        Ok(store.favorites.iter_mut().find(|f| f.id == id).map(|f| {
            f.likes += 1;
            f.clone()
        }))
    }

    async fn delete(&self, id: i64, owner_id: Option<i64>) -> Result<u64, DomainError> {
        let mut store = self.store.write().await;
        let before = store.favorites.len();
        store
            .favorites
            .retain(|f| !(f.id == id && owner_id.map_or(true, |owner| f.is_owned_by(owner))));
        Ok((before - store.favorites.len()) as u64)
    }
}
