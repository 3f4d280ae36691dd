//! Missing-inventory reconciliation engine.
//!
//! Given a fully materialized catalog item set and inventory record set,
//! classify every item, per location, as present or missing. Membership is
//! answered by a set of `(plu, location)` pairs flattened out of the
//! inventory records once per run; the per-pair check is then O(1) instead
//! of a scan over every inventory record for every item at every location.
//!
//! Everything here is pure and synchronous. Malformed input (records or
//! items without a `plu`, location entries without an ID) is tolerated by
//! skipping, never by returning an error.

use std::collections::HashSet;

use crate::types::{CatalogItem, InventoryRecord, Location};

/// Set of `(plu, location)` pairs with stock, derived from inventory records.
///
/// A pure, call-scoped artifact: build it once per reconciliation run and
/// reuse it across every item/location check in that run. The index is a
/// union across all records, so two records sharing a PLU at different
/// locations both contribute their pairs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MembershipIndex {
    pairs: HashSet<(String, String)>,
}

impl MembershipIndex {
    /// Build the index by flattening every record's location list.
    ///
    /// Entries with an empty `plu` or empty location ID contribute nothing.
    /// Cost is O(total location entries across all records).
    #[must_use]
    pub fn build(inventory: &[InventoryRecord]) -> Self {
        let mut pairs = HashSet::new();
        for record in inventory {
            if record.plu.is_empty() {
                continue;
            }
            for entry in &record.locations {
                if entry.location.is_empty() {
                    continue;
                }
                pairs.insert((record.plu.clone(), entry.location.clone()));
            }
        }
        Self { pairs }
    }

    /// Whether `plu` has stock at `location_id`.
    #[must_use]
    pub fn contains(&self, plu: &str, location_id: &str) -> bool {
        self.pairs
            .contains(&(plu.to_string(), location_id.to_string()))
    }

    /// Number of `(plu, location)` pairs in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the index holds no pairs at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Missing items for one location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationMissing {
    /// Location ID.
    pub location_id: String,
    /// Location name, when the upstream enumeration knew one.
    pub location_name: Option<String>,
    /// Items with no inventory at this location, in catalog order.
    pub missing: Vec<CatalogItem>,
}

impl LocationMissing {
    /// Number of missing items at this location.
    #[must_use]
    pub fn count(&self) -> usize {
        self.missing.len()
    }

    /// Display label for the location: name when known, otherwise the ID.
    #[must_use]
    pub fn label(&self) -> &str {
        self.location_name.as_deref().unwrap_or(&self.location_id)
    }
}

/// Result of an all-locations reconciliation run.
///
/// Holds one entry per location that has at least one missing item, in the
/// order the locations were supplied. Locations where every catalog item
/// has inventory are omitted entirely rather than included with a zero
/// count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingReport {
    /// Per-location missing items, upstream location order, zero-miss
    /// locations omitted.
    pub locations: Vec<LocationMissing>,
    /// Catalog items that could not be classified anywhere because their
    /// `plu` was empty or absent. They never appear in any location's
    /// missing list; this count keeps the data loss visible.
    pub unidentified_items: usize,
}

impl MissingReport {
    /// Total missing-item count summed across all locations.
    #[must_use]
    pub fn total_missing(&self) -> usize {
        self.locations.iter().map(LocationMissing::count).sum()
    }

    /// Number of locations with at least one missing item.
    #[must_use]
    pub fn locations_affected(&self) -> usize {
        self.locations.len()
    }

    /// Look up the entry for a location ID, if it has missing items.
    #[must_use]
    pub fn get(&self, location_id: &str) -> Option<&LocationMissing> {
        self.locations
            .iter()
            .find(|entry| entry.location_id == location_id)
    }

    /// Whether no location is missing anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

/// Items from `items` whose `(plu, location_id)` pair is absent from `index`.
///
/// Preserves the relative order of `items`. Items with an empty `plu` are
/// skipped: they are never reported missing and never counted present,
/// since membership cannot be judged for an unidentified item.
#[must_use]
pub fn find_missing(
    items: &[CatalogItem],
    location_id: &str,
    index: &MembershipIndex,
) -> Vec<CatalogItem> {
    items
        .iter()
        .filter(|item| item.has_plu() && !index.contains(&item.plu, location_id))
        .cloned()
        .collect()
}

/// Reconcile every supplied location against the catalog.
///
/// Builds the membership index exactly once and reuses it for every
/// location. Locations are visited in the order supplied by the upstream
/// enumeration; locations with zero missing items are left out of the
/// report.
#[must_use]
pub fn reconcile_all_locations(
    items: &[CatalogItem],
    inventory: &[InventoryRecord],
    locations: &[Location],
) -> MissingReport {
    let index = MembershipIndex::build(inventory);
    let unidentified_items = items.iter().filter(|item| !item.has_plu()).count();

    let mut report = MissingReport {
        locations: Vec::new(),
        unidentified_items,
    };
    for location in locations {
        let missing = find_missing(items, &location.id, &index);
        if missing.is_empty() {
            continue;
        }
        report.locations.push(LocationMissing {
            location_id: location.id.clone(),
            location_name: location.name.clone(),
            missing,
        });
    }
    report
}

/// Reconcile a single location against the catalog.
///
/// One-location runs skip the location enumeration entirely, so this takes
/// the target ID directly and returns the flat missing-items sequence.
#[must_use]
pub fn reconcile_single_location(
    items: &[CatalogItem],
    inventory: &[InventoryRecord],
    location_id: &str,
) -> Vec<CatalogItem> {
    let index = MembershipIndex::build(inventory);
    find_missing(items, location_id, &index)
}
