//! Eve-style listing envelope.

use serde::{Deserialize, Serialize};

/// One page of a paginated listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page.
    #[serde(rename = "_items", default = "Vec::new")]
    pub items: Vec<T>,
    /// Pagination metadata, when the endpoint reports it.
    #[serde(rename = "_meta", default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

/// Pagination metadata reported alongside a listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// 1-based page number of this page.
    #[serde(default)]
    pub page: Option<u32>,
    /// Page size the server applied.
    #[serde(default)]
    pub max_results: Option<u32>,
    /// Total item count across all pages.
    #[serde(default)]
    pub total: Option<u64>,
    /// Total page count.
    #[serde(default)]
    pub total_pages: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CatalogItem;

    #[test]
    fn test_deserialize_page_with_meta() {
        let page: Page<CatalogItem> = serde_json::from_str(
            r#"{"_items": [{"plu": "1", "name": "A"}], "_meta": {"page": 1, "max_results": 500, "total": 1, "total_pages": 1}}"#,
        )
        .expect("page should deserialize");
        assert_eq!(page.items.len(), 1);
        let meta = page.meta.expect("meta should be present");
        assert_eq!(meta.page, Some(1));
        assert_eq!(meta.total_pages, Some(1));
    }

    #[test]
    fn test_deserialize_page_without_items_key() {
        let page: Page<CatalogItem> =
            serde_json::from_str("{}").expect("empty object should deserialize as empty page");
        assert!(page.items.is_empty());
        assert!(page.meta.is_none());
    }
}
