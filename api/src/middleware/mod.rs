pub mod auth;
pub mod cors;

pub use auth::{authorize, AuthContext, TokenAuth, TOKEN_HEADER};
pub use cors::create_cors;
