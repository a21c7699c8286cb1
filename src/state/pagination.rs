//! Pagination state machine
//!
//! The current page always stays within `1..=total_pages`; moves past
//! either end are ignored instead of failing.

use serde::{Deserialize, Serialize};

use crate::models::PageMeta;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    current_page: u32,
    total_pages: u32,
}

impl Pagination {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
        }
    }

    pub fn with_total_pages(total_pages: u32) -> Self {
        Self {
            current_page: 1,
            total_pages: total_pages.max(1),
        }
    }

    /// Start on a page before the real page count is known
    pub fn at_page(page: u32) -> Self {
        let page = page.max(1);
        Self {
            current_page: page,
            total_pages: page,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// "Next" is enabled unless on the last page
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// "Previous" is enabled unless on the first page
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Advance one page; returns whether the page changed
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// Go back one page; returns whether the page changed
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// Jump to a page if it is within bounds
    pub fn go_to(&mut self, page: u32) -> bool {
        if page < 1 || page > self.total_pages || page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Adopt the server's view of the page count, clamping into bounds
    pub fn sync(&mut self, meta: &PageMeta) {
        self.total_pages = meta.total_pages.max(1);
        self.current_page = meta.current_page.clamp(1, self.total_pages);
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new()
    }
}
