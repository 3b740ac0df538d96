//! HTTP API for the Clicaki backend
//!
//! Library half of the binary, exported so integration tests can build the
//! application against in-memory storage.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use app::create_app;
pub use routes::AppState;
