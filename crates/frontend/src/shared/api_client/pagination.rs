use contracts::shared::pagination::{PageQuery, PaginationMeta};
use serde::Serialize;

use super::error::{ApiError, ApiResult};

/// Parses the `x-pagination` header. A missing header means the endpoint
/// returned everything at once.
pub fn parse_pagination_header(
    header: Option<&str>,
    item_count: usize,
) -> ApiResult<PaginationMeta> {
    match header.map(str::trim).filter(|h| !h.is_empty()) {
        None => Ok(PaginationMeta::single_page(item_count)),
        Some(raw) => {
            serde_json::from_str(raw).map_err(|e| ApiError::Pagination(format!("{}: {}", e, raw)))
        }
    }
}

/// Encodes a query struct for the URL, `?` included; empty for no params.
pub fn query_suffix<Q: Serialize>(query: &Q) -> ApiResult<String> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Encode(e.to_string()))?;
    if qs.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!("?{}", qs))
    }
}

pub fn page_query_suffix(query: &PageQuery) -> ApiResult<String> {
    query_suffix(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_header_is_single_page() {
        let meta = parse_pagination_header(None, 7).unwrap();
        assert_eq!(meta.total_count, 7);
        assert_eq!(meta.total_pages, 1);
        assert!(!meta.has_next);

        let blank = parse_pagination_header(Some("  "), 0).unwrap();
        assert_eq!(blank.total_pages, 1);
    }

    #[test]
    fn test_header_json_is_parsed() {
        let meta = parse_pagination_header(
            Some(r#"{"CurrentPage":3,"TotalPages":4,"PageSize":25,"TotalCount":90,"HasPrevious":true,"HasNext":true}"#),
            25,
        )
        .unwrap();
        assert_eq!(meta.current_page, 3);
        assert_eq!(meta.page_size, 25);
    }

    #[test]
    fn test_garbage_header_is_an_error() {
        assert!(matches!(
            parse_pagination_header(Some("page=2"), 0),
            Err(ApiError::Pagination(_))
        ));
    }

    #[test]
    fn test_page_query_encoding() {
        let q = PageQuery::page(2, 25).with_search("red shoes");
        let suffix = page_query_suffix(&q).unwrap();
        assert!(suffix.starts_with('?'));
        assert!(suffix.contains("PageNumber=2"));
        assert!(suffix.contains("PageSize=25"));
        assert!(suffix.contains("SearchTerm=red"));
        assert!(!suffix.contains("OrderBy"));
    }
}
