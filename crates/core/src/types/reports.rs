//! Operation-report (snooze history) types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snooze action codes used in operation reports.
pub const ACTION_SNOOZE: i64 = 1;
/// The unsnooze action code.
pub const ACTION_UNSNOOZE: i64 = 2;

/// One snooze/unsnooze event for a PLU, extracted from an operation report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnoozeEvent {
    /// Operation report ID this event came from.
    pub report_id: String,
    /// Product lookup unit identifier.
    pub plu: String,
    /// Product name as recorded in the report.
    pub name: String,
    /// Action code (1 = snooze, 2 = unsnooze).
    pub action: Option<i64>,
    /// Snooze window start, as reported.
    pub snooze_start: Option<String>,
    /// Snooze window end, as reported.
    pub snooze_end: Option<String>,
    /// Platform snooze ID.
    pub snooze_id: Option<String>,
    /// Name of the user (or automated system) that performed the action.
    pub user_name: String,
    /// User ID, empty for automated actions.
    pub user_id: String,
    /// When the operation report was created.
    pub created: Option<DateTime<Utc>>,
}

impl SnoozeEvent {
    /// Human-readable action label.
    #[must_use]
    pub fn action_label(&self) -> String {
        match self.action {
            Some(ACTION_SNOOZE) => "SNOOZE".to_string(),
            Some(ACTION_UNSNOOZE) => "UNSNOOZE".to_string(),
            Some(other) => other.to_string(),
            None => "UNKNOWN".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_label() {
        let mut event = SnoozeEvent {
            report_id: "r1".to_string(),
            plu: "123".to_string(),
            name: "Cola".to_string(),
            action: Some(ACTION_SNOOZE),
            snooze_start: None,
            snooze_end: None,
            snooze_id: None,
            user_name: "ops".to_string(),
            user_id: "u1".to_string(),
            created: None,
        };
        assert_eq!(event.action_label(), "SNOOZE");
        event.action = Some(ACTION_UNSNOOZE);
        assert_eq!(event.action_label(), "UNSNOOZE");
        event.action = Some(15);
        assert_eq!(event.action_label(), "15");
        event.action = None;
        assert_eq!(event.action_label(), "UNKNOWN");
    }
}
