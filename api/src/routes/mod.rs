//! HTTP route handlers
//!
//! - `auth` - registration, login and current-user lookup
//! - `favorites` - creation, lookup, listings, likes and deletion

pub mod auth;
pub mod favorites;

use std::sync::Arc;

use ck_core::repositories::{FavoriteRepository, UserRepository};
use ck_core::services::{AuthService, FavoriteService};

/// Application state that holds shared services
pub struct AppState<U, F>
where
    U: UserRepository,
    F: FavoriteRepository,
{
    pub auth_service: Arc<AuthService<U>>,
    pub favorite_service: Arc<FavoriteService<F>>,
}

impl<U, F> AppState<U, F>
where
    U: UserRepository,
    F: FavoriteRepository,
{
    pub fn new(auth_service: Arc<AuthService<U>>, favorite_service: Arc<FavoriteService<F>>) -> Self {
        Self {
            auth_service,
            favorite_service,
        }
    }
}
