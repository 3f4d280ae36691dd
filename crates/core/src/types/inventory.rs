//! Inventory record types.

use serde::{Deserialize, Serialize};

/// One location entry inside an inventory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryLocation {
    /// Location ID holding stock for the record's PLU.
    #[serde(default)]
    pub location: String,
    /// Platform-internal product reference at this location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
}

/// An inventory record for one PLU.
///
/// A single record may list many locations holding stock for that PLU, and
/// the same PLU may appear in more than one record. Membership checks must
/// union across all records rather than keeping only the last one seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    /// Product lookup unit identifier. Empty when the source omits it.
    #[serde(default)]
    pub plu: String,
    /// Locations holding stock for this PLU, in source order.
    #[serde(default)]
    pub locations: Vec<InventoryLocation>,
}

impl InventoryRecord {
    /// Create a record for `plu` stocked at the given location IDs.
    #[must_use]
    pub fn new<I, S>(plu: impl Into<String>, location_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            plu: plu.into(),
            locations: location_ids
                .into_iter()
                .map(|id| InventoryLocation {
                    location: id.into(),
                    product: None,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_record() {
        let record: InventoryRecord = serde_json::from_str(
            r#"{"plu": "123", "locations": [{"location": "loc1", "product": "p1"}, {"location": "loc2"}]}"#,
        )
        .expect("inventory record should deserialize");
        assert_eq!(record.plu, "123");
        assert_eq!(record.locations.len(), 2);
        assert_eq!(record.locations[0].location, "loc1");
        assert_eq!(record.locations[0].product.as_deref(), Some("p1"));
        assert_eq!(record.locations[1].product, None);
    }

    #[test]
    fn test_deserialize_record_without_locations() {
        let record: InventoryRecord = serde_json::from_str(r#"{"plu": "123"}"#)
            .expect("inventory record without locations should deserialize");
        assert!(record.locations.is_empty());
    }
}
