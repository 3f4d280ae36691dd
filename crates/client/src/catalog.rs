//! Catalog item listing.

use serde::Deserialize;
use tracing::{debug, instrument};

use retail_ops_core::{CatalogItem, Page};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::paging;

/// Page size for the catalog items listing.
const ITEMS_PAGE_SIZE: usize = 500;

/// Wire shape of one catalog item row. The listing returns many more
/// fields; only the identifying ones are kept.
#[derive(Debug, Deserialize)]
struct ItemRow {
    #[serde(default)]
    plu: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

impl ApiClient {
    /// List every visible catalog item for an account.
    ///
    /// Paginates exhaustively over the items listing (page size 500) and
    /// maps each row to a [`CatalogItem`]. Rows without a `plu` are kept
    /// with an empty one; the reconciliation engine decides what to do
    /// with them.
    ///
    /// # Errors
    ///
    /// Returns an error when any page request fails. No partial results
    /// are returned.
    #[instrument(skip(self), fields(account = %account))]
    pub async fn list_items(&self, account: &str) -> Result<Vec<CatalogItem>, ApiError> {
        let url = self.url(&format!("/catalog/accounts/{account}/items"));
        let mut items = Vec::new();
        let mut page_number: u32 = 1;

        loop {
            let payload = serde_json::json!({
                "visible": true,
                "max_results": ITEMS_PAGE_SIZE,
                "sort": "-_id",
                "page": page_number,
            });
            let page: Page<ItemRow> = self.post_json(&url, &payload).await?;
            let fetched = page.items.len();
            debug!(page = page_number, fetched, "fetched catalog items page");

            items.extend(page.items.into_iter().map(|row| CatalogItem {
                plu: row.plu.unwrap_or_default(),
                name: row.name.unwrap_or_default(),
            }));

            if !paging::has_more(fetched, ITEMS_PAGE_SIZE, page.meta.as_ref()) {
                break;
            }
            page_number += 1;
        }

        Ok(items)
    }
}
