//! Page windows over a sequence.

use crate::query::QueryError;

/// One page of a sequence plus navigation indicators.
#[derive(Debug)]
pub struct Pager<'a, T> {
    items: &'a [T],
    page: usize,
    size: usize,
}

impl<'a, T> Pager<'a, T> {
    /// Build a pager for the 1-based `page` of `size` items.
    ///
    /// Page 1 always exists, even for an empty sequence.
    pub fn new(items: &'a [T], page: usize, size: usize) -> Result<Self, QueryError> {
        if size == 0 {
            return Err(QueryError::LimitExceeded);
        }
        let pager = Self { items, page, size };
        if page == 0 || page > pager.total().max(1) {
            return Err(QueryError::OutOfRange);
        }
        Ok(pager)
    }

    /// Total number of pages.
    pub fn total(&self) -> usize {
        self.items.len().div_ceil(self.size)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn next(&self) -> Option<usize> {
        (self.page < self.total()).then(|| self.page + 1)
    }

    pub fn prev(&self) -> Option<usize> {
        (self.page > 1).then(|| self.page - 1)
    }

    /// Items on the current page.
    pub fn results(&self) -> &'a [T] {
        let start = (self.page - 1) * self.size;
        let end = (start + self.size).min(self.items.len());
        self.items.get(start..end).unwrap_or_default()
    }
}
