//! Inventory record listing.

use serde::Deserialize;
use tracing::{debug, instrument};

use retail_ops_core::{InventoryLocation, InventoryRecord, Page};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::paging;

/// Page size for the inventory listing. The endpoint rejects larger pages.
const INVENTORY_PAGE_SIZE: usize = 50;

#[derive(Debug, Deserialize)]
struct InventoryRow {
    #[serde(default)]
    plu: Option<String>,
    #[serde(default)]
    locations: Vec<InventoryLocationRow>,
}

#[derive(Debug, Deserialize)]
struct InventoryLocationRow {
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    product: Option<String>,
}

impl ApiClient {
    /// List inventory records for an account.
    ///
    /// With `location` set, the listing is filtered server-side to records
    /// stocked at that one location; without it, records across every
    /// location are returned. Paginates exhaustively (page size 50).
    ///
    /// # Errors
    ///
    /// Returns an error when any page request fails. No partial results
    /// are returned.
    #[instrument(skip(self), fields(account = %account, location = location.unwrap_or("<all>")))]
    pub async fn list_inventory(
        &self,
        account: &str,
        location: Option<&str>,
    ) -> Result<Vec<InventoryRecord>, ApiError> {
        let url = self.url(&format!("/catalog/accounts/{account}/inventory"));
        let mut records = Vec::new();
        let mut page_number: u32 = 1;

        loop {
            let mut payload = serde_json::json!({
                "sort": "-_id",
                "max_results": INVENTORY_PAGE_SIZE,
                "page": page_number,
            });
            if let Some(location) = location
                && let Some(map) = payload.as_object_mut()
            {
                map.insert(
                    "locations".to_string(),
                    serde_json::json!([location]),
                );
            }

            let page: Page<InventoryRow> = self.post_json(&url, &payload).await?;
            let fetched = page.items.len();
            debug!(page = page_number, fetched, "fetched inventory page");

            records.extend(page.items.into_iter().map(|row| InventoryRecord {
                plu: row.plu.unwrap_or_default(),
                locations: row
                    .locations
                    .into_iter()
                    .map(|entry| InventoryLocation {
                        location: entry.location.unwrap_or_default(),
                        product: entry.product,
                    })
                    .collect(),
            }));

            if !paging::has_more(fetched, INVENTORY_PAGE_SIZE, page.meta.as_ref()) {
                break;
            }
            page_number += 1;
        }

        Ok(records)
    }
}
