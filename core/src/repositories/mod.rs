//! Persistence contracts for users and favorites.
//!
//! Implementations live in the infrastructure crate; the in-memory mocks
//! here back the service unit tests.

pub mod favorite;
pub mod user;

pub use favorite::FavoriteRepository;
pub use user::UserRepository;

#[cfg(test)]
pub use favorite::MockFavoriteRepository;
#[cfg(test)]
pub use user::MockUserRepository;
