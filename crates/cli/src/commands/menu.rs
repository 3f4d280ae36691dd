//! Menu item-count command.

use retail_ops_client::{ApiClient, ApiError};
use retail_ops_core::menu::summarize_menu;

/// Count categories and active/snoozed items in one menu at one location.
///
/// # Errors
///
/// Returns an error when the preview request fails.
pub async fn run(
    client: &ApiClient,
    account: &str,
    menu: &str,
    location: &str,
    channel: i64,
) -> Result<(), ApiError> {
    let preview = client.menu_preview(account, menu, location, channel).await?;
    let summary = summarize_menu(&preview);

    tracing::info!("Categories:    {}", summary.categories);
    tracing::info!("Subcategories: {}", summary.subcategories);
    tracing::info!("Active items:  {}", summary.active_items());
    tracing::info!("Snoozed items: {}", summary.snoozed_items());
    for entry in &summary.snoozed {
        tracing::info!(
            "  snoozed: {} (PLU {}) in {}{}",
            entry.product_name,
            entry.plu,
            entry.category,
            entry
                .subcategory
                .as_deref()
                .map_or_else(String::new, |name| format!(" / {name}")),
        );
    }
    Ok(())
}
