//! Domain entities representing core business objects.

pub mod favorite;
pub mod token;
pub mod user;


// Re-export commonly used types
pub use favorite::{
    Favorite, FavoriteDraft, NewFavorite, DESCRIPTION_MAX_LEN, TITLE_MAX_LEN, URL_MAX_LEN,
};
pub use token::{Claims, TOKEN_EXPIRY_DAYS};
pub use user::{NewUser, User, EMAIL_MAX_LEN, NAME_MAX_LEN};
