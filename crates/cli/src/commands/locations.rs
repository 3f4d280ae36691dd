//! Location listing command.

use retail_ops_client::{ApiClient, ApiError};

/// List an account's locations.
///
/// # Errors
///
/// Returns an error when the listing request fails.
pub async fn run(client: &ApiClient, account: &str) -> Result<(), ApiError> {
    let account_name = client.get_account_name(account).await?;
    let locations = client.list_locations(account).await?;

    tracing::info!(
        "{} locations for account {}",
        locations.len(),
        account_name.as_deref().unwrap_or(account)
    );
    for location in &locations {
        tracing::info!("  {}  {}", location.id, location.label());
    }
    Ok(())
}
