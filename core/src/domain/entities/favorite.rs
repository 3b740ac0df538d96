//! Favorite entity: a bookmarked link, optionally owned by a user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum title length in characters
pub const TITLE_MAX_LEN: usize = 250;

/// Maximum description length in characters
pub const DESCRIPTION_MAX_LEN: usize = 250;

/// Maximum URL length in characters
pub const URL_MAX_LEN: usize = 2048;

/// Stored favorite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    /// Store-generated identifier, immutable
    pub id: i64,

    /// Absolute URL of the bookmarked page
    pub url: String,

    /// Non-empty title
    pub title: String,

    /// Optional short description
    pub description: Option<String>,

    /// Like counter, never negative
    pub likes: i64,

    /// Assigned by the store at insert time; the listing sort key
    pub created_at: DateTime<Utc>,

    /// Owning user, when created by an authenticated caller
    pub owner_id: Option<i64>,
}

impl Favorite {
    /// Whether `user_id` owns this favorite
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.owner_id == Some(user_id)
    }
}

/// Caller-supplied fields for a new favorite, not yet validated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteDraft {
    pub url: String,
    pub title: String,
    pub description: Option<String>,
    pub likes: Option<i64>,
}

impl FavoriteDraft {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_likes(mut self, likes: i64) -> Self {
        self.likes = Some(likes);
        self
    }
}

/// Validated favorite ready for insertion
///
/// Carries no timestamp: the store assigns `created_at` when it inserts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFavorite {
    pub url: String,
    pub title: String,
    pub description: Option<String>,
    pub likes: i64,
    pub owner_id: Option<i64>,
}
