//! Favorite service module
//!
//! Creation, lookup, paginated listing, likes and owner-scoped deletion of
//! bookmarked links.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::FavoriteServiceConfig;
pub use service::FavoriteService;
