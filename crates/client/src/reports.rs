//! Snooze history from operation reports.
//!
//! The platform records snooze/unsnooze activity as operation reports. A
//! query for one PLU's history filters the reports listing with a
//! Mongo-style `where` document: operation types, account, location, a
//! `_created` time window, and a dynamic `snooze.<plu>` existence check.

use chrono::{DateTime, Duration, Utc};
use serde_json::{Value, json};
use tracing::instrument;

use retail_ops_core::{ACTION_SNOOZE, Page, SnoozeEvent};

use crate::client::ApiClient;
use crate::error::ApiError;

/// Operation types queried by default (snooze-relevant report kinds).
pub const DEFAULT_OPERATION_TYPES: &[i64] = &[15, 2, 3];

/// Result-set cap for one history query.
const MAX_RESULTS: usize = 500;

/// Attributed user name for automated midnight snoozes.
const AUTOMATED_USER: &str = "QUEST";

/// Fallback user name when a report carries no user.
const PLATFORM_USER: &str = "DELIVERECT";

/// Parameters for one snooze-history query.
#[derive(Debug, Clone)]
pub struct SnoozeQuery {
    /// Account ID.
    pub account: String,
    /// Location ID.
    pub location: String,
    /// PLU whose snooze history is wanted.
    pub plu: String,
    /// How many weeks back from now to search.
    pub weeks_back: i64,
    /// Operation types to include; `None` uses [`DEFAULT_OPERATION_TYPES`].
    pub operation_types: Option<Vec<i64>>,
}

impl SnoozeQuery {
    /// Build the `where` document for this query, with the window ending
    /// at `stop`.
    #[must_use]
    pub fn where_document(&self, stop: DateTime<Utc>) -> Value {
        let start = stop - Duration::weeks(self.weeks_back);
        let operation_types = self
            .operation_types
            .clone()
            .unwrap_or_else(|| DEFAULT_OPERATION_TYPES.to_vec());

        let mut doc = json!({
            "operationType": { "$in": operation_types },
            "account": { "$in": [self.account] },
            "location": { "$in": [self.location] },
            "_created": {
                "$gt": start.to_rfc3339_opts(chrono::SecondsFormat::Micros, true),
                "$lt": stop.to_rfc3339_opts(chrono::SecondsFormat::Micros, true),
            },
        });
        if let Some(map) = doc.as_object_mut() {
            // The snooze map is keyed by PLU, so the existence check is a
            // dynamic dotted path.
            map.insert(format!("snooze.{}", self.plu), json!({ "$exists": true }));
        }
        doc
    }
}

/// Pull this PLU's snooze events out of raw operation reports.
///
/// Reports that do not mention the PLU in their `snooze` map are skipped.
/// Snoozes landing exactly on a midnight boundary with no user attached
/// are attributed to the automated scheduler.
fn extract_events(reports: &[Value], plu: &str) -> Vec<SnoozeEvent> {
    let mut events = Vec::new();
    for report in reports {
        let Some(info) = report.pointer(&format!("/snooze/{plu}")) else {
            continue;
        };
        let report_id = string_at(report, "/_id").unwrap_or_default();
        let action = info.pointer("/action").and_then(Value::as_i64);
        let snooze_end = string_at(info, "/snoozeEnd");

        let mut user_name =
            string_at(report, "/user/name").unwrap_or_else(|| PLATFORM_USER.to_string());
        let mut user_id = string_at(report, "/user/id").unwrap_or_default();
        // Midnight-aligned snoozes are scheduler-driven, not human actions.
        if action == Some(ACTION_SNOOZE)
            && snooze_end.as_deref().is_some_and(|end| end.contains("00:00"))
        {
            user_name = AUTOMATED_USER.to_string();
            user_id = String::new();
        }

        let created = string_at(report, "/_created")
            .and_then(|raw| DateTime::parse_from_rfc3339(&raw).ok())
            .map(|stamp| stamp.with_timezone(&Utc));
        events.push(SnoozeEvent {
            report_id,
            plu: string_at(info, "/plu").unwrap_or_else(|| plu.to_string()),
            name: string_at(info, "/name").unwrap_or_default(),
            action,
            snooze_start: string_at(info, "/snoozeStart"),
            snooze_end,
            snooze_id: string_at(info, "/snoozeId"),
            user_name,
            user_id,
            created,
        });
    }
    events.sort_by_key(|event| event.created);
    events
}

fn string_at(value: &Value, pointer: &str) -> Option<String> {
    value
        .pointer(pointer)
        .and_then(Value::as_str)
        .map(ToString::to_string)
}

impl ApiClient {
    /// Fetch the snooze history for one PLU at one location.
    ///
    /// Events are returned oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error when the reports query fails.
    #[instrument(skip(self, query), fields(account = %query.account, plu = %query.plu))]
    pub async fn snooze_history(&self, query: &SnoozeQuery) -> Result<Vec<SnoozeEvent>, ApiError> {
        let url = self.url(&format!(
            "/evefind/operationReports?sort=-_created&max_results={MAX_RESULTS}"
        ));
        let payload = json!({ "where": query.where_document(Utc::now()) });
        let page: Page<Value> = self.post_json(&url, &payload).await?;
        Ok(extract_events(&page.items, &query.plu))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> SnoozeQuery {
        SnoozeQuery {
            account: "acc1".to_string(),
            location: "loc1".to_string(),
            plu: "40090042".to_string(),
            weeks_back: 1,
            operation_types: None,
        }
    }

    #[test]
    fn test_where_document_shape() {
        let stop = DateTime::parse_from_rfc3339("2026-08-30T12:00:00Z")
            .expect("valid timestamp")
            .with_timezone(&Utc);
        let doc = query().where_document(stop);

        assert_eq!(doc.pointer("/operationType/$in"), Some(&json!([15, 2, 3])));
        assert_eq!(doc.pointer("/account/$in"), Some(&json!(["acc1"])));
        assert_eq!(doc.pointer("/location/$in"), Some(&json!(["loc1"])));
        assert_eq!(
            doc.pointer("/snooze.40090042/$exists"),
            Some(&json!(true))
        );
        assert_eq!(
            doc.pointer("/_created/$lt").and_then(Value::as_str),
            Some("2026-08-30T12:00:00.000000Z")
        );
        assert_eq!(
            doc.pointer("/_created/$gt").and_then(Value::as_str),
            Some("2026-08-23T12:00:00.000000Z")
        );
    }

    #[test]
    fn test_where_document_custom_operation_types() {
        let mut query = query();
        query.operation_types = Some(vec![15]);
        let doc = query.where_document(Utc::now());
        assert_eq!(doc.pointer("/operationType/$in"), Some(&json!([15])));
    }

    #[test]
    fn test_extract_skips_reports_without_the_plu() {
        let reports = vec![json!({"_id": "r1", "snooze": {"999": {"action": 1}}})];
        assert!(extract_events(&reports, "123").is_empty());
    }

    #[test]
    fn test_extract_reads_event_fields() {
        let reports = vec![json!({
            "_id": "r1",
            "_created": "2026-08-25T09:30:00Z",
            "user": {"name": "Alice", "id": "u1"},
            "snooze": {"123": {
                "action": 2,
                "snoozeStart": "2026-08-25T09:00:00",
                "snoozeEnd": "2026-08-25T21:30:00",
                "snoozeId": "s1",
                "name": "Cola",
                "plu": "123"
            }}
        })];
        let events = extract_events(&reports, "123");
        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.report_id, "r1");
        assert_eq!(event.action_label(), "UNSNOOZE");
        assert_eq!(event.user_name, "Alice");
        assert_eq!(event.snooze_id.as_deref(), Some("s1"));
        assert!(event.created.is_some());
    }

    #[test]
    fn test_midnight_snooze_attributed_to_scheduler() {
        let reports = vec![json!({
            "_id": "r1",
            "user": {"name": "Alice", "id": "u1"},
            "snooze": {"123": {"action": 1, "snoozeEnd": "2026-08-26T00:00:00"}}
        })];
        let events = extract_events(&reports, "123");
        assert_eq!(events[0].user_name, "QUEST");
        assert_eq!(events[0].user_id, "");
    }

    #[test]
    fn test_events_sorted_oldest_first() {
        let reports = vec![
            json!({"_id": "r2", "_created": "2026-08-26T00:00:00Z", "snooze": {"123": {"action": 2}}}),
            json!({"_id": "r1", "_created": "2026-08-25T00:00:00Z", "snooze": {"123": {"action": 1}}}),
        ];
        let events = extract_events(&reports, "123");
        assert_eq!(events[0].report_id, "r1");
        assert_eq!(events[1].report_id, "r2");
    }
}
