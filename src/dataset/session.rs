//! Explicit application state.
//!
//! The original clients kept the active dataset, history list and table state
//! in ad-hoc globals; here they live in one [`Session`] value that commands own
//! and thread through the pure transforms. Rendering and persistence stay with
//! the caller.

use super::types::{Column, Dataset, DatasetMeta};
use super::view::{DEFAULT_PAGE_SIZE, PageView, SortDirective, view};

#[derive(Debug, Clone)]
pub struct Session {
    current: Option<Dataset>,
    history: Vec<DatasetMeta>,
    sort: Option<SortDirective>,
    page: usize,
    page_size: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Session {
    #[must_use]
    pub const fn new(page_size: usize) -> Self {
        Self {
            current: None,
            history: Vec::new(),
            sort: None,
            page: 1,
            page_size,
        }
    }

    #[must_use]
    pub const fn current(&self) -> Option<&Dataset> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn history(&self) -> &[DatasetMeta] {
        &self.history
    }

    #[must_use]
    pub const fn sort(&self) -> Option<SortDirective> {
        self.sort
    }

    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Make `dataset` the active one. Sort and page state belong to the
    /// previous dataset, so both reset.
    pub fn select_dataset(&mut self, dataset: Dataset) {
        self.current = Some(dataset);
        self.sort = None;
        self.page = 1;
    }

    pub fn set_history(&mut self, datasets: Vec<DatasetMeta>) {
        self.history = datasets;
    }

    /// Apply the header-click toggle rule. Switching to a different sort key
    /// resets to page 1; flipping direction on the same key keeps the page.
    pub fn request_sort(&mut self, key: Column) {
        let previous_key = self.sort.map(|d| d.key);
        self.sort = Some(SortDirective::toggle(self.sort, key));
        if previous_key != Some(key) {
            self.page = 1;
        }
    }

    /// Set an explicit sort directive (e.g. from CLI flags).
    pub fn set_sort(&mut self, sort: Option<SortDirective>) {
        self.sort = sort;
    }

    /// Jump to `page`, clamped into range by the next `page_view` call.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn next_page(&mut self) {
        if self.page < self.total_pages() {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.current
            .as_ref()
            .map_or(0, |d| d.rows.len().div_ceil(self.page_size.max(1)))
    }

    /// Current table page through the sort/paginate engine.
    #[must_use]
    pub fn page_view(&self) -> PageView {
        self.current.as_ref().map_or_else(PageView::default, |d| {
            view(&d.rows, self.sort, self.page, self.page_size)
        })
    }

    /// Drop all session state (logout).
    pub fn clear(&mut self) {
        self.current = None;
        self.history.clear();
        self.sort = None;
        self.page = 1;
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
