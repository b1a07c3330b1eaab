//! Page metadata supplied by the data source.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Page size used when the source does not report one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Pagination metadata for the page currently on screen.
///
/// Values come straight from the backend and are not trusted: use
/// [`PageMeta::normalized`] before doing arithmetic with them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// 1-based page number.
    pub current_page: u32,
    /// Number of pages.
    pub total_pages: u32,
    /// Number of items across all pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_items: Option<u64>,
    /// Items per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl PageMeta {
    /// Create metadata for `current_page` of `total_pages`.
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        Self {
            current_page,
            total_pages,
            total_items: None,
            page_size: None,
        }
    }

    /// Derive metadata from an item count and a page size. A zero page size
    /// counts pages with [`DEFAULT_PAGE_SIZE`].
    pub fn from_items(current_page: u32, total_items: u64, page_size: u32) -> Self {
        let size = if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size };
        let total_pages = u32::try_from(total_items.div_ceil(u64::from(size))).unwrap_or(u32::MAX);
        Self {
            current_page,
            total_pages,
            total_items: Some(total_items),
            page_size: Some(page_size),
        }
        .normalized()
    }

    /// Set the total item count.
    pub fn total_items(mut self, total_items: u64) -> Self {
        self.total_items = Some(total_items);
        self
    }

    /// Set the page size.
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Clamp into a consistent state.
    ///
    /// `total_pages` becomes at least 1, `current_page` is clamped into
    /// `1..=total_pages`, and a zero page size is dropped.
    pub fn normalized(self) -> Self {
        let total_pages = self.total_pages.max(1);
        let current_page = self.current_page.clamp(1, total_pages);
        if current_page != self.current_page || total_pages != self.total_pages {
            log::debug!(
                "clamped page {}/{} to {}/{}",
                self.current_page,
                self.total_pages,
                current_page,
                total_pages
            );
        }
        Self {
            current_page,
            total_pages,
            total_items: self.total_items,
            page_size: self.page_size.filter(|size| *size > 0),
        }
    }

    /// Effective page size, falling back to [`DEFAULT_PAGE_SIZE`].
    pub fn effective_page_size(&self) -> u32 {
        self.page_size
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Returns `true` if a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.normalized().current_page > 1
    }

    /// Returns `true` if a next page exists.
    pub fn has_next(&self) -> bool {
        let meta = self.normalized();
        meta.current_page < meta.total_pages
    }

    /// Range of items shown on this page, when the total is known.
    pub fn item_range(&self) -> Option<ItemRange> {
        let meta = self.normalized();
        let total = meta.total_items?;
        let size = u64::from(meta.effective_page_size());
        let page = u64::from(meta.current_page);

        let start = ((page - 1).saturating_mul(size).saturating_add(1)).min(total);
        let end = page.saturating_mul(size).min(total);
        Some(ItemRange { start, end, total })
    }
}

/// The slice of items visible on the current page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ItemRange {
    /// First item on the page, 1-based.
    pub start: u64,
    /// Last item on the page.
    pub end: u64,
    /// Total item count.
    pub total: u64,
}

impl fmt::Display for ItemRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {}-{} of {}", self.start, self.end, self.total)
    }
}
