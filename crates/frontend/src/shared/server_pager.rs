//! State of a table paginated by the backend.

use contracts::shared::pagination::{PageQuery, PaginationMeta};
use leptos::prelude::*;

use crate::shared::config::PAGE_SIZE_OPTIONS;

/// 0-based UI page for the 1-based page reported by the backend.
pub fn page_index(meta: &PaginationMeta) -> usize {
    meta.current_page.saturating_sub(1)
}

#[derive(Clone, Copy)]
pub struct ServerPager {
    /// 0-based
    pub page: RwSignal<usize>,
    pub page_size: RwSignal<usize>,
    pub total_pages: RwSignal<usize>,
    pub total_count: RwSignal<usize>,
    request_seq: StoredValue<u64>,
}

impl ServerPager {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(0),
            page_size: RwSignal::new(PAGE_SIZE_OPTIONS[0]),
            total_pages: RwSignal::new(1),
            total_count: RwSignal::new(0),
            request_seq: StoredValue::new(0),
        }
    }

    /// Query for the current page; tracks `page` and `page_size`.
    pub fn query(&self) -> PageQuery {
        PageQuery::page(self.page.get() + 1, self.page_size.get())
    }

    /// Starts a request; only the latest one may apply its result.
    pub fn begin(&self) -> u64 {
        self.request_seq.update_value(|s| *s += 1);
        self.request_seq.get_value()
    }

    pub fn is_current(&self, seq: u64) -> bool {
        self.request_seq.get_value() == seq
    }

    pub fn apply(&self, meta: &PaginationMeta) {
        self.total_pages.set(meta.total_pages.max(1));
        self.total_count.set(meta.total_count);
        let page = page_index(meta);
        if self.page.get_untracked() != page {
            self.page.set(page);
        }
    }

    pub fn reset(&self) {
        self.page.set(0);
    }

    pub fn set_page_size(&self, size: usize) {
        self.page_size.set(size);
        self.page.set(0);
    }
}

impl Default for ServerPager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_index_from_meta() {
        let mut meta = PaginationMeta::single_page(3);
        assert_eq!(page_index(&meta), 0);
        meta.current_page = 4;
        assert_eq!(page_index(&meta), 3);
        meta.current_page = 0;
        assert_eq!(page_index(&meta), 0);
    }
}
