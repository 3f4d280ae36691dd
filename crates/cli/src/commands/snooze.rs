//! Snooze history command.

use retail_ops_client::{ApiClient, ApiError, SnoozeQuery};

/// Show one PLU's snooze history at one location, oldest first.
///
/// # Errors
///
/// Returns an error when the reports query fails.
pub async fn run(
    client: &ApiClient,
    account: &str,
    location: &str,
    plu: &str,
    weeks: i64,
) -> Result<(), ApiError> {
    let query = SnoozeQuery {
        account: account.to_string(),
        location: location.to_string(),
        plu: plu.to_string(),
        weeks_back: weeks,
        operation_types: None,
    };
    let events = client.snooze_history(&query).await?;

    if events.is_empty() {
        tracing::info!("No snooze history found for PLU {plu} in the last {weeks} week(s)");
        return Ok(());
    }

    tracing::info!("{} snooze events for PLU {plu}:", events.len());
    for (index, event) in events.iter().enumerate() {
        tracing::info!(
            "  #{} {} {} by {} (start {}, end {})",
            index + 1,
            event
                .created
                .map_or_else(|| "<unknown time>".to_string(), |stamp| stamp.to_rfc3339()),
            event.action_label(),
            event.user_name,
            event.snooze_start.as_deref().unwrap_or("-"),
            event.snooze_end.as_deref().unwrap_or("-"),
        );
    }
    Ok(())
}
