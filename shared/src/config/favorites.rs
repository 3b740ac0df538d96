//! Favorites listing and ownership policy

use serde::{Deserialize, Serialize};

/// Favorites configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FavoritesConfig {
    /// Items per page on the public recent listing
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Maximum items returned by the caller's own listing
    #[serde(default = "default_owner_list_limit")]
    pub owner_list_limit: u32,

    /// Scope deletes to the caller's own favorites
    #[serde(default = "default_enforce_delete_ownership")]
    pub enforce_delete_ownership: bool,
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            owner_list_limit: default_owner_list_limit(),
            enforce_delete_ownership: default_enforce_delete_ownership(),
        }
    }
}

fn default_page_size() -> u32 {
    crate::types::DEFAULT_PAGE_SIZE
}

fn default_owner_list_limit() -> u32 {
    10
}

fn default_enforce_delete_ownership() -> bool {
    true
}
