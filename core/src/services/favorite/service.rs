//! Main favorite service implementation

use std::sync::Arc;

use ck_shared::validation::{is_absolute_url, max_chars, not_blank};
use ck_shared::Pagination;

use crate::domain::entities::favorite::{
    Favorite, FavoriteDraft, NewFavorite, DESCRIPTION_MAX_LEN, TITLE_MAX_LEN, URL_MAX_LEN,
};
use crate::domain::value_objects::{FavoritePage, Identity};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::FavoriteRepository;

use super::config::FavoriteServiceConfig;

const RESOURCE: &str = "Favorite";

/// Service for managing favorites
pub struct FavoriteService<F>
where
    F: FavoriteRepository,
{
    /// Favorite repository for database operations
    favorite_repository: Arc<F>,
    /// Service configuration
    config: FavoriteServiceConfig,
}

impl<F> FavoriteService<F>
where
    F: FavoriteRepository,
{
    /// Create a new favorite service
    pub fn new(favorite_repository: Arc<F>, config: FavoriteServiceConfig) -> Self {
        Self {
            favorite_repository,
            config,
        }
    }

    /// Validate and store a new favorite
    ///
    /// The favorite is owned by `owner` when one is given. Nothing is written
    /// unless every field passes validation.
    pub async fn create(
        &self,
        owner: Option<&Identity>,
        draft: FavoriteDraft,
    ) -> DomainResult<Favorite> {
        let new_favorite = validate_draft(draft, owner.map(|o| o.id))?;

        let favorite = self.favorite_repository.create(new_favorite).await?;
        tracing::info!(
            favorite_id = favorite.id,
            owner_id = ?favorite.owner_id,
            "Favorite created"
        );
        Ok(favorite)
    }

    /// Fetch a favorite by id
    pub async fn get(&self, id: i64) -> DomainResult<Favorite> {
        self.favorite_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(RESOURCE))
    }

    /// One page of all favorites, most recent first
    ///
    /// `page` is 1-indexed; values below 1 are rejected. A page past the end
    /// is empty but still reports the real page count.
    pub async fn list_recent(&self, page: i64) -> DomainResult<FavoritePage> {
        let pagination = Pagination::new(page, self.config.page_size)
            .ok_or(ValidationError::InvalidPage { page })?;

        let total = self.favorite_repository.count().await?;
        let favorites = self
            .favorite_repository
            .list_recent(pagination.limit(), pagination.offset())
            .await?;

        tracing::debug!(page, total, returned = favorites.len(), "Listed recent favorites");
        Ok(FavoritePage {
            favorites,
            total_pages: pagination.total_pages(total),
            page: pagination.page,
        })
    }

    /// Most recent favorites owned by `owner_id`
    pub async fn list_by_owner(&self, owner_id: i64) -> DomainResult<Vec<Favorite>> {
        self.favorite_repository
            .list_by_owner(owner_id, self.config.owner_list_limit)
            .await
    }

    /// Add one like
    pub async fn like(&self, id: i64) -> DomainResult<Favorite> {
        self.favorite_repository
            .increment_likes(id)
            .await?
            .ok_or_else(|| DomainError::not_found(RESOURCE))
    }

    /// Delete a favorite on behalf of `caller`
    ///
    /// With ownership enforcement on, only the owner's favorites match. A
    /// second delete of the same id reports `NotFound`.
    pub async fn delete(&self, id: i64, caller: &Identity) -> DomainResult<u64> {
        let owner_id = self.config.enforce_delete_ownership.then_some(caller.id);

        let deleted = self.favorite_repository.delete(id, owner_id).await?;
        if deleted == 0 {
            tracing::debug!(favorite_id = id, caller_id = caller.id, "Nothing to delete");
            return Err(DomainError::not_found(RESOURCE));
        }

        tracing::info!(favorite_id = id, caller_id = caller.id, "Favorite deleted");
        Ok(deleted)
    }
}

fn validate_draft(draft: FavoriteDraft, owner_id: Option<i64>) -> Result<NewFavorite, ValidationError> {
    let url = draft.url.trim();
    if url.is_empty() {
        return Err(ValidationError::required("url"));
    }
    check_length("url", url, URL_MAX_LEN)?;
    if !is_absolute_url(url) {
        return Err(ValidationError::InvalidUrl {
            value: url.to_string(),
        });
    }

    let title = draft.title.trim();
    if !not_blank(title) {
        return Err(ValidationError::required("title"));
    }
    check_length("title", title, TITLE_MAX_LEN)?;

    let description = draft
        .description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());
    if let Some(description) = &description {
        check_length("description", description, DESCRIPTION_MAX_LEN)?;
    }

    let likes = draft.likes.unwrap_or(0);
    if likes < 0 {
        return Err(ValidationError::NegativeLikes { value: likes });
    }

    Ok(NewFavorite {
        url: url.to_string(),
        title: title.to_string(),
        description,
        likes,
        owner_id,
    })
}

fn check_length(field: &str, value: &str, max: usize) -> Result<(), ValidationError> {
    if max_chars(value, max) {
        Ok(())
    } else {
        Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
            actual: value.chars().count(),
        })
    }
}
