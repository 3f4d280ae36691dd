//! Location and channel-link types.

use serde::{Deserialize, Serialize};

/// A physical location belonging to an account.
///
/// The platform sometimes hands out bare location IDs and sometimes full
/// records; everything is normalized into this one shape at the client
/// boundary before it reaches any engine code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Location ID. Empty when the source omits it; such entries are
    /// dropped at the client boundary.
    #[serde(rename = "_id", default)]
    pub id: String,
    /// Location name, when the platform knows one.
    #[serde(default)]
    pub name: Option<String>,
}

impl Location {
    /// Create a location from an ID with no known name.
    #[must_use]
    pub fn from_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }

    /// Display label: the name when known, otherwise the ID.
    #[must_use]
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// Channel links for one sales channel, grouped by the channel's backend ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelLinkGroup {
    /// Channel backend ID.
    pub channel_id: i64,
    /// Resolved channel name, when the integrations listing knows it.
    pub channel_name: Option<String>,
    /// IDs of the account's channel links on this channel.
    pub channel_link_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_falls_back_to_id() {
        let unnamed = Location::from_id("loc1");
        assert_eq!(unnamed.label(), "loc1");

        let named = Location {
            id: "loc1".to_string(),
            name: Some("Main Street".to_string()),
        };
        assert_eq!(named.label(), "Main Street");
    }

    #[test]
    fn test_deserialize_wire_shape() {
        let location: Location = serde_json::from_str(r#"{"_id": "abc", "name": "Depot"}"#)
            .expect("location should deserialize");
        assert_eq!(location.id, "abc");
        assert_eq!(location.name.as_deref(), Some("Depot"));
    }
}
