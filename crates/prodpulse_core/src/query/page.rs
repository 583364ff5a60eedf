//! Page bounds and paginated result packaging.
//!
//! # Invariants
//! - `Page` holds a positive size and non-negative number by construction.
//! - `total_pages == ceil(total_items / page_size)`; zero items yield zero
//!   pages.
//! - `items.len() <= page_size` for every result produced from a `Page`.

use super::{QueryError, QueryResult};
use serde::{Deserialize, Serialize};

/// Zero-indexed page request bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    number: u32,
    size: u32,
}

impl Page {
    /// Validates caller-supplied page bounds.
    ///
    /// A non-positive size or negative number is a caller error and is
    /// rejected, never clamped.
    pub fn new(number: i64, size: i64) -> QueryResult<Self> {
        let number =
            u32::try_from(number).map_err(|_| QueryError::InvalidPageNumber(number))?;
        if size <= 0 {
            return Err(QueryError::InvalidPageSize(size));
        }
        let size = u32::try_from(size).map_err(|_| QueryError::InvalidPageSize(size))?;

        Ok(Self { number, size })
    }

    pub fn number(self) -> u32 {
        self.number
    }

    pub fn size(self) -> u32 {
        self.size
    }

    /// Rows skipped before this page starts.
    pub fn offset(self) -> i64 {
        i64::from(self.number) * i64::from(self.size)
    }

    /// Maximum rows fetched for this page.
    pub fn limit(self) -> i64 {
        i64::from(self.size)
    }
}

/// One page of records plus pagination metadata.
///
/// Serialized with the camelCase names API clients consume:
/// `items`, `currentPage`, `pageSize`, `totalItems`, `totalPages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub current_page: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub total_pages: u64,
}

impl<T> PagedResult<T> {
    /// Packages fetched items with the derived page count.
    pub fn new(items: Vec<T>, page: Page, total_items: u64) -> Self {
        let total_pages = total_items.div_ceil(u64::from(page.size()));
        Self {
            items,
            current_page: page.number(),
            page_size: page.size(),
            total_items,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Page, PagedResult};
    use crate::query::QueryError;

    #[test]
    fn page_rejects_non_positive_size() {
        assert_eq!(
            Page::new(0, 0).unwrap_err(),
            QueryError::InvalidPageSize(0)
        );
        assert_eq!(
            Page::new(0, -3).unwrap_err(),
            QueryError::InvalidPageSize(-3)
        );
    }

    #[test]
    fn page_rejects_negative_number() {
        assert_eq!(
            Page::new(-1, 10).unwrap_err(),
            QueryError::InvalidPageNumber(-1)
        );
    }

    #[test]
    fn offset_is_number_times_size() {
        let page = Page::new(3, 25).unwrap();
        assert_eq!(page.offset(), 75);
        assert_eq!(page.limit(), 25);
    }

    #[test]
    fn total_pages_is_ceiling_of_items_over_size() {
        let page = Page::new(0, 2).unwrap();
        assert_eq!(PagedResult::<u8>::new(Vec::new(), page, 5).total_pages, 3);
        assert_eq!(PagedResult::<u8>::new(Vec::new(), page, 4).total_pages, 2);
        assert_eq!(PagedResult::<u8>::new(Vec::new(), page, 1).total_pages, 1);
    }

    #[test]
    fn zero_items_yield_zero_pages() {
        let page = Page::new(0, 10).unwrap();
        let result = PagedResult::<u8>::new(Vec::new(), page, 0);
        assert_eq!(result.total_items, 0);
        assert_eq!(result.total_pages, 0);
    }
}
