//! Pagination utilities for service layer
//!
//! Callers speak 1-based page numbers; repositories receive a 0-based
//! [`PageRequest`] and turn it into an offset/limit pair.

/// Largest offset or limit a SQL driver binds as a signed 64-bit integer.
const MAX_ROWS: u64 = i64::MAX as u64;

/// Zero-based page request handed to repositories.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// 0-based page index
    pub index: u64,
    /// items per page
    pub size: u64,
}

impl PageRequest {
    /// Translate a 1-based page number. Page 0 is treated as the first page.
    pub fn from_page_number(page_number: u64, page_size: u64) -> Self {
        Self { index: page_number.saturating_sub(1), size: page_size }
    }

    /// Row offset of the first item on this page, capped at `i64::MAX`.
    pub fn offset(self) -> u64 { self.index.saturating_mul(self.size).min(MAX_ROWS) }

    /// Capped at `i64::MAX`, same as [`PageRequest::offset`].
    pub fn limit(self) -> u64 { self.size.min(MAX_ROWS) }

    /// Apply the page to an already ordered sequence.
    pub fn slice<T: Clone>(self, items: &[T]) -> Vec<T> {
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        let len = usize::try_from(self.limit()).unwrap_or(usize::MAX);
        items.iter().skip(start).take(len).cloned().collect()
    }
}
