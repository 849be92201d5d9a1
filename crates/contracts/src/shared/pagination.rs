use serde::{Deserialize, Serialize};

/// Name of the response header that carries [`PaginationMeta`] as JSON.
pub const PAGINATION_HEADER: &str = "x-pagination";

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page metadata sent by the backend in the `x-pagination` header.
///
/// The backend emits PascalCase keys; camelCase is accepted as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaginationMeta {
    #[serde(alias = "currentPage")]
    pub current_page: usize,
    #[serde(alias = "totalPages")]
    pub total_pages: usize,
    #[serde(alias = "pageSize")]
    pub page_size: usize,
    #[serde(alias = "totalCount")]
    pub total_count: usize,
    #[serde(default, alias = "hasPrevious")]
    pub has_previous: bool,
    #[serde(default, alias = "hasNext")]
    pub has_next: bool,
}

impl PaginationMeta {
    /// Metadata for a response that came back without the header:
    /// everything fits on a single page.
    pub fn single_page(count: usize) -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            page_size: count.max(1),
            total_count: count,
            has_previous: false,
            has_next: false,
        }
    }
}

/// One page of a server-side paginated list.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedList<T> {
    pub items: Vec<T>,
    pub meta: PaginationMeta,
}

impl<T> Default for PagedList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            meta: PaginationMeta::single_page(0),
        }
    }
}

/// Query parameters understood by every paged list endpoint.
///
/// `page_number` is 1-based, as on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PageQuery {
    pub page_number: usize,
    pub page_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search_term: None,
            order_by: None,
            status: None,
        }
    }
}

impl PageQuery {
    pub fn page(page_number: usize, page_size: usize) -> Self {
        Self {
            page_number: page_number.max(1),
            page_size: page_size.max(1),
            ..Self::default()
        }
    }

    /// Sets the search term, dropping blank input.
    pub fn with_search(mut self, term: &str) -> Self {
        let term = term.trim();
        self.search_term = if term.is_empty() {
            None
        } else {
            Some(term.to_string())
        };
        self
    }

    pub fn with_status(mut self, status: Option<String>) -> Self {
        self.status = status.filter(|s| !s.is_empty());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_from_pascal_case_header() {
        let raw = r#"{"CurrentPage":2,"TotalPages":5,"PageSize":10,"TotalCount":47,"HasPrevious":true,"HasNext":true}"#;
        let meta: PaginationMeta = serde_json::from_str(raw).unwrap();
        assert_eq!(meta.current_page, 2);
        assert_eq!(meta.total_pages, 5);
        assert_eq!(meta.total_count, 47);
        assert!(meta.has_previous && meta.has_next);
    }

    #[test]
    fn test_meta_accepts_camel_case_without_flags() {
        let raw = r#"{"currentPage":1,"totalPages":1,"pageSize":20,"totalCount":3}"#;
        let meta: PaginationMeta = serde_json::from_str(raw).unwrap();
        assert_eq!(meta.page_size, 20);
        assert!(!meta.has_next);
    }

    #[test]
    fn test_with_search_drops_blank_terms() {
        assert_eq!(PageQuery::default().with_search("   ").search_term, None);
        assert_eq!(
            PageQuery::default().with_search(" nike ").search_term.as_deref(),
            Some("nike")
        );
    }

    #[test]
    fn test_page_clamps_to_one() {
        let q = PageQuery::page(0, 0);
        assert_eq!(q.page_number, 1);
        assert_eq!(q.page_size, 1);
    }
}
