//! Request and response bodies

pub mod favorite;
pub mod user;

pub use ck_shared::ErrorResponse;
pub use favorite::*;
pub use user::*;
