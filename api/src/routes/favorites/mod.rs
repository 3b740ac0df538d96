//! Favorite route handlers
//!
//! - `POST /favorite` (gated) - create
//! - `GET /favorite?id=` - fetch one
//! - `DELETE /favorite?id=` (gated) - delete
//! - `POST /favorite/like?id=` - add a like
//! - `GET /favorites?page=` - public paginated listing
//! - `GET /my-favorites` (gated) - caller's own favorites

pub mod create;
pub mod delete;
pub mod fetch;
pub mod like;
