//! Missing-inventory report command.
//!
//! Fetches the account's catalog items and inventory records, runs the
//! reconciliation engine, and writes the result as CSV. With a location
//! argument only that location is checked (and the inventory fetch is
//! filtered to it server-side); without one, every location of the account
//! is reconciled against one unfiltered inventory fetch.

use std::path::PathBuf;

use thiserror::Error;

use retail_ops_client::{ApiClient, ApiError};
use retail_ops_core::recon;

use crate::export::{self, ExportError};

/// Errors that can occur while producing the report.
#[derive(Debug, Error)]
pub enum MissingInventoryError {
    /// A platform API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Writing the CSV report failed.
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Run the report and write it to `out` (or a derived default path).
///
/// # Errors
///
/// Returns an error when fetching inputs or writing the report fails. The
/// engine itself cannot fail; inputs are fully materialized before it runs.
pub async fn run(
    client: &ApiClient,
    account: &str,
    location: Option<&str>,
    out: Option<&str>,
) -> Result<(), MissingInventoryError> {
    let items = client.list_items(account).await?;
    tracing::info!("Fetched {} catalog items", items.len());

    match location {
        Some(location_id) => {
            let inventory = client.list_inventory(account, Some(location_id)).await?;
            tracing::info!("Fetched {} inventory records", inventory.len());

            let missing = recon::reconcile_single_location(&items, &inventory, location_id);
            let label = client
                .get_location_name(location_id)
                .await?
                .unwrap_or_else(|| location_id.to_string());

            let path = output_path(out, account, location_id);
            export::write_single_location(&label, &missing, &path)?;
            tracing::info!(
                "{} missing items at {label}; report written to {}",
                missing.len(),
                path.display()
            );
        }
        None => {
            let inventory = client.list_inventory(account, None).await?;
            tracing::info!("Fetched {} inventory records", inventory.len());
            let locations = client.list_locations(account).await?;
            tracing::info!("Checking {} locations", locations.len());

            let report = recon::reconcile_all_locations(&items, &inventory, &locations);

            let path = output_path(out, account, "all");
            export::write_report(&report, &path)?;
            tracing::info!(
                "{} missing items across {} locations; report written to {}",
                report.total_missing(),
                report.locations_affected(),
                path.display()
            );
            if report.unidentified_items > 0 {
                tracing::warn!(
                    "{} catalog items had no PLU and were not classified",
                    report.unidentified_items
                );
            }
        }
    }

    Ok(())
}

fn output_path(out: Option<&str>, account: &str, scope: &str) -> PathBuf {
    out.map_or_else(
        || PathBuf::from(format!("missing_inventory_{account}_{scope}.csv")),
        PathBuf::from,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path_includes_account_and_scope() {
        let path = output_path(None, "acc1", "loc1");
        assert_eq!(path, PathBuf::from("missing_inventory_acc1_loc1.csv"));
    }

    #[test]
    fn test_explicit_output_path_wins() {
        let path = output_path(Some("report.csv"), "acc1", "all");
        assert_eq!(path, PathBuf::from("report.csv"));
    }
}
