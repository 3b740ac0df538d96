//! Common type definitions shared across layers

pub mod pagination;

pub use pagination::{Pagination, DEFAULT_PAGE_SIZE};
