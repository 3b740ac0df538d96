//! Configuration for the favorite service

use ck_shared::config::FavoritesConfig;
use ck_shared::DEFAULT_PAGE_SIZE;

/// Configuration for the favorite service
#[derive(Debug, Clone)]
pub struct FavoriteServiceConfig {
    /// Items per page of the public listing
    pub page_size: u32,
    /// Maximum items returned by the per-owner listing
    pub owner_list_limit: u32,
    /// Whether deletes are restricted to the favorite's owner
    pub enforce_delete_ownership: bool,
}

impl Default for FavoriteServiceConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            owner_list_limit: DEFAULT_PAGE_SIZE,
            enforce_delete_ownership: true,
        }
    }
}

impl From<&FavoritesConfig> for FavoriteServiceConfig {
    fn from(config: &FavoritesConfig) -> Self {
        Self {
            page_size: config.page_size,
            owner_list_limit: config.owner_list_limit,
            enforce_delete_ownership: config.enforce_delete_ownership,
        }
    }
}
