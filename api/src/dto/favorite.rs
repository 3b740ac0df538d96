use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use ck_core::domain::entities::favorite::{Favorite, FavoriteDraft};
use ck_core::domain::value_objects::FavoritePage;

/// Body of `POST /favorite`
///
/// Only shape checks happen here. Length limits apply to the trimmed values
/// and are enforced by `FavoriteService`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFavoriteRequest {
    #[validate(length(min = 1))]
    pub url: String,

    #[validate(length(min = 1))]
    pub title: String,

    pub description: Option<String>,

    #[validate(range(min = 0))]
    pub likes: Option<i64>,
}

impl From<CreateFavoriteRequest> for FavoriteDraft {
    fn from(request: CreateFavoriteRequest) -> Self {
        Self {
            url: request.url,
            title: request.title,
            description: request.description,
            likes: request.likes,
        }
    }
}

/// `?id=N`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FavoriteIdQuery {
    pub id: i64,
}

/// `?page=N`, defaulting to the first page
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteResponse {
    pub id: i64,
    pub url: String,
    pub title: String,
    pub description: Option<String>,
    pub likes: i64,
    pub created_at: DateTime<Utc>,
    pub owner_id: Option<i64>,
}

impl From<Favorite> for FavoriteResponse {
    fn from(favorite: Favorite) -> Self {
        Self {
            id: favorite.id,
            url: favorite.url,
            title: favorite.title,
            description: favorite.description,
            likes: favorite.likes,
            created_at: favorite.created_at,
            owner_id: favorite.owner_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteListResponse {
    pub favorites: Vec<FavoriteResponse>,
    pub total_pages: u64,
    pub page: u32,
}

impl From<FavoritePage> for FavoriteListResponse {
    fn from(page: FavoritePage) -> Self {
        Self {
            favorites: page.favorites.into_iter().map(Into::into).collect(),
            total_pages: page.total_pages,
            page: page.page,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MyFavoritesResponse {
    pub favorites: Vec<FavoriteResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub deleted: u64,
}
