//! Page-advance decisions for Eve-style listings.
//!
//! Listing endpoints are paged with a 1-based `page` parameter and a fixed
//! page size. The loop over pages stops when a page comes back empty, when
//! a page is shorter than the requested size, or when server-reported
//! pagination metadata says the current page is the last one.

use retail_ops_core::PageMeta;

/// Whether another page should be fetched after the current one.
#[must_use]
pub fn has_more(items_on_page: usize, page_size: usize, meta: Option<&PageMeta>) -> bool {
    if items_on_page == 0 {
        return false;
    }
    if let Some(meta) = meta
        && let (Some(page), Some(total_pages)) = (meta.page, meta.total_pages)
        && page >= total_pages
    {
        return false;
    }
    items_on_page >= page_size
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(page: u32, total_pages: u32) -> PageMeta {
        PageMeta {
            page: Some(page),
            max_results: None,
            total: None,
            total_pages: Some(total_pages),
        }
    }

    #[test]
    fn test_empty_page_stops() {
        assert!(!has_more(0, 500, None));
        assert!(!has_more(0, 500, Some(&meta(1, 10))));
    }

    #[test]
    fn test_short_page_stops() {
        assert!(!has_more(499, 500, None));
    }

    #[test]
    fn test_full_page_continues_without_meta() {
        assert!(has_more(500, 500, None));
    }

    #[test]
    fn test_last_page_by_meta_stops() {
        assert!(!has_more(500, 500, Some(&meta(3, 3))));
    }

    #[test]
    fn test_full_page_with_more_pages_continues() {
        assert!(has_more(500, 500, Some(&meta(2, 3))));
    }

    #[test]
    fn test_meta_without_counts_falls_back_to_page_size() {
        let meta = PageMeta {
            page: None,
            max_results: None,
            total: None,
            total_pages: None,
        };
        assert!(has_more(500, 500, Some(&meta)));
        assert!(!has_more(12, 500, Some(&meta)));
    }
}
