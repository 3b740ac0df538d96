//! Value objects representing immutable domain concepts.

pub mod favorite_page;
pub mod identity;

// Re-export commonly used types
pub use favorite_page::FavoritePage;
pub use identity::Identity;
