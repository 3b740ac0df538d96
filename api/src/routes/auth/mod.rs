//! Authentication route handlers
//!
//! - `POST /register` - create an account
//! - `POST /login` - exchange credentials for a token
//! - `GET /user` - the token holder's account

pub mod login;
pub mod me;
pub mod register;
