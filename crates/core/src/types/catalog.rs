//! Catalog item types.

use serde::{Deserialize, Serialize};

/// A single item in an account's catalog.
///
/// Produced by paginated enumeration of the catalog items listing. The
/// platform does not guarantee that `plu` values are unique, and items can
/// arrive with an empty or absent `plu`; such items cannot be matched
/// against inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Product lookup unit identifier. Empty when the source omits it.
    #[serde(default)]
    pub plu: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
}

impl CatalogItem {
    /// Create a new catalog item.
    #[must_use]
    pub fn new(plu: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            plu: plu.into(),
            name: name.into(),
        }
    }

    /// Whether this item carries a usable product identifier.
    #[must_use]
    pub fn has_plu(&self) -> bool {
        !self.plu.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_missing_plu() {
        let item: CatalogItem = serde_json::from_str(r#"{"name": "Cola"}"#)
            .expect("catalog item without plu should deserialize");
        assert_eq!(item.plu, "");
        assert_eq!(item.name, "Cola");
        assert!(!item.has_plu());
    }

    #[test]
    fn test_deserialize_full_item() {
        let item: CatalogItem = serde_json::from_str(r#"{"plu": "123", "name": "Cola"}"#)
            .expect("catalog item should deserialize");
        assert!(item.has_plu());
        assert_eq!(item, CatalogItem::new("123", "Cola"));
    }
}
