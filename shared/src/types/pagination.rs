//! Pagination math for list endpoints

use serde::{Deserialize, Serialize};

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Validated pagination window (1-indexed page)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-indexed)
    pub page: u32,

    /// Number of items per page
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// Build a pagination window
    ///
    /// Returns `None` when `page < 1` or `per_page == 0`; callers decide how
    /// to report that. Pages are never clamped.
    pub fn new(page: i64, per_page: u32) -> Option<Self> {
        if page < 1 || per_page == 0 {
            return None;
        }
        let page = u32::try_from(page).ok()?;
        Some(Self { page, per_page })
    }

    /// Rows to skip: `(page - 1) * per_page`
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }

    /// Rows to take
    pub fn limit(&self) -> u32 {
        self.per_page
    }

    /// `ceil(total / per_page)`; zero when there is nothing to page
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(u64::from(self.per_page))
    }
}
