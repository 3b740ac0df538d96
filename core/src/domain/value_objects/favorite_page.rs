//! One page of the public recent-favorites listing.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Favorite;

/// Items of the requested page plus the total page count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoritePage {
    /// Favorites, most recent first
    pub favorites: Vec<Favorite>,

    /// `ceil(total / page_size)`
    pub total_pages: u64,

    /// Page that was requested (1-indexed)
    pub page: u32,
}
