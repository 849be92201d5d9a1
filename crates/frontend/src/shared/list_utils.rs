//! Client-side list helpers: search, sort and page slicing for endpoints
//! that return the whole collection at once.

use std::cmp::Ordering;

/// Types that can be matched against a search box query.
pub trait Searchable {
    /// Text fields the query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.trim().to_lowercase();
        needle.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Types that can be sorted by a named column.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Case-insensitive comparison for optional text columns; empty sorts first.
pub fn cmp_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    a.unwrap_or("")
        .to_lowercase()
        .cmp(&b.unwrap_or("").to_lowercase())
}

pub fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// One page of an in-memory list.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    /// 0-based page actually shown (clamped to the last page).
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

/// Slices `items` into page `page` (0-based) of `page_size`.
///
/// An out-of-range page falls back to the last one, so deleting the last
/// row of the last page does not leave an empty table.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> PageSlice<T> {
    let page_size = page_size.max(1);
    let total_count = items.len();
    let total_pages = if total_count == 0 {
        1
    } else {
        total_count.div_ceil(page_size)
    };
    let page = page.min(total_pages - 1);
    let start = page * page_size;
    let end = (start + page_size).min(total_count);
    PageSlice {
        items: items.get(start..end).unwrap_or(&[]).to_vec(),
        page,
        total_pages,
        total_count,
    }
}

/// Sort indicator for a column header.
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-icon table__sort-icon--active"
    } else {
        "table__sort-icon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        note: Option<&'static str>,
        price: f64,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name, self.note.unwrap_or("")]
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "price" => cmp_f64(self.price, other.price),
                "note" => cmp_text(self.note, other.note),
                _ => cmp_text(Some(self.name), Some(other.name)),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Nike", note: Some("sport"), price: 30.0 },
            Row { name: "adidas", note: None, price: 10.0 },
            Row { name: "Zara", note: Some("Fashion"), price: 20.0 },
        ]
    }

    #[test]
    fn test_filter_is_case_insensitive_over_all_fields() {
        assert_eq!(filter_list(&rows(), "NIK").len(), 1);
        assert_eq!(filter_list(&rows(), "fashion")[0].name, "Zara");
        assert_eq!(filter_list(&rows(), "  ").len(), 3);
        assert!(filter_list(&rows(), "gucci").is_empty());
    }

    #[test]
    fn test_sort_by_field_and_direction() {
        let mut data = rows();
        sort_list(&mut data, "name", true);
        assert_eq!(
            data.iter().map(|r| r.name).collect::<Vec<_>>(),
            vec!["adidas", "Nike", "Zara"]
        );
        sort_list(&mut data, "price", false);
        assert_eq!(data[0].price, 30.0);
        sort_list(&mut data, "note", true);
        assert_eq!(data[0].note, None);
    }

    #[test]
    fn test_paginate_slices_and_clamps() {
        let data: Vec<u32> = (1..=23).collect();
        let first = paginate(&data, 0, 10);
        assert_eq!(first.items, (1..=10).collect::<Vec<_>>());
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.total_count, 23);

        let last = paginate(&data, 2, 10);
        assert_eq!(last.items, vec![21, 22, 23]);

        let beyond = paginate(&data, 9, 10);
        assert_eq!(beyond.page, 2);
        assert_eq!(beyond.items.len(), 3);
    }

    #[test]
    fn test_paginate_empty_list_has_one_page() {
        let empty: Vec<u32> = Vec::new();
        let slice = paginate(&empty, 3, 10);
        assert_eq!(slice.page, 0);
        assert_eq!(slice.total_pages, 1);
        assert!(slice.items.is_empty());
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "price", true), " ⇅");
    }
}
