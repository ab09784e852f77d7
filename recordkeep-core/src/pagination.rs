//! Pagination types

use serde::Serialize;

/// Maximum items per page
pub const MAX_PER_PAGE: u32 = 100;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: u32,
    /// Items per page (max 100)
    pub per_page: u32,
}

impl Pagination {
    /// Create pagination with validation.
    ///
    /// - Page is clamped to minimum of 1
    /// - Per page is clamped to 1..=100
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    /// Build from raw query strings without ever failing.
    ///
    /// Unparseable values fall back to page 1 / `default_per_page`, a page
    /// below 1 becomes 1 and a per-page below 1 becomes `default_per_page`.
    pub fn lenient(page: Option<&str>, per_page: Option<&str>, default_per_page: u32) -> Self {
        let parse = |raw: Option<&str>| raw.and_then(|s| s.trim().parse::<i64>().ok());

        let page = match parse(page) {
            Some(p) if p >= 1 => p.min(u32::MAX as i64) as u32,
            _ => 1,
        };
        let per_page = match parse(per_page) {
            Some(n) if n >= 1 => n.min(MAX_PER_PAGE as i64) as u32,
            _ => default_per_page,
        };

        Self::new(page, per_page)
    }

    /// Calculate SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        (self.page as i64 - 1) * self.per_page as i64
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> i64 {
        self.per_page as i64
    }
}

/// One page of results plus the total row count
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    /// Items for current page
    pub items: Vec<T>,
    /// Total count across all pages
    pub total: i64,
    /// Current page number
    pub page: u32,
    /// Items per page
    pub per_page: u32,
}

impl<T> Page<T> {
    /// Total number of pages; zero when there are no rows.
    pub fn pages(&self) -> u32 {
        if self.total <= 0 {
            0
        } else {
            ((self.total as u64 + self.per_page as u64 - 1) / self.per_page as u64) as u32
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
        }
    }
}
