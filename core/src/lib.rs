//! # Clicaki Core
//!
//! Core business logic and domain layer for the Clicaki backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    Claims, Favorite, FavoriteDraft, FavoritePage, Identity, NewFavorite, NewUser, User,
};
pub use errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
pub use repositories::{FavoriteRepository, UserRepository};
pub use services::{
    AuthService, AuthServiceConfig, FavoriteService, FavoriteServiceConfig, LoginOutcome,
    TokenService, TokenServiceConfig,
};
