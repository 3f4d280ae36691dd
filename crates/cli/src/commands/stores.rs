//! Store availability sweep command.

use retail_ops_client::{ApiClient, ApiError, StoreMode};

/// Apply one availability mode across an account (or one channel's links).
///
/// # Errors
///
/// Returns an error when enumeration fails, the channel has no links, or a
/// request cannot be sent at all. Individual rejections are reported and
/// do not abort the sweep.
pub async fn run(
    client: &ApiClient,
    account: &str,
    mode: StoreMode,
    channel: Option<i64>,
) -> Result<(), ApiError> {
    let sweep = client.sweep_busy_mode(account, mode, channel).await?;

    tracing::info!(
        "Marked {} targets {mode} ({} rejected)",
        sweep.updated.len(),
        sweep.failed.len()
    );
    for id in &sweep.failed {
        tracing::warn!("  rejected: {id}");
    }
    Ok(())
}
