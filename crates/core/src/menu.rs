//! Menu-preview item counting.
//!
//! Walks a [`MenuPreview`]'s category tree and tallies active vs snoozed
//! items, resolving product references through the preview's flat products
//! map. Products referenced by a category but absent from the map are
//! counted with placeholder details, matching what the preview endpoint
//! itself does for dangling references.

use crate::types::{MenuPreview, MenuProduct};

/// One counted menu entry, with the category path it was found under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// Top-level category name.
    pub category: String,
    /// Subcategory name, `None` for products attached directly to a category.
    pub subcategory: Option<String>,
    /// Product display name.
    pub product_name: String,
    /// Product lookup unit identifier.
    pub plu: String,
    /// Product ID in the preview's products map.
    pub product_id: String,
}

/// Item counts for one menu preview.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuSummary {
    /// Number of top-level categories.
    pub categories: usize,
    /// Number of subcategories across all categories.
    pub subcategories: usize,
    /// Orderable entries (not snoozed), in menu order.
    pub active: Vec<MenuEntry>,
    /// Snoozed entries, in menu order.
    pub snoozed: Vec<MenuEntry>,
}

impl MenuSummary {
    /// Number of orderable items, excluding snoozed ones.
    #[must_use]
    pub fn active_items(&self) -> usize {
        self.active.len()
    }

    /// Number of snoozed items.
    #[must_use]
    pub fn snoozed_items(&self) -> usize {
        self.snoozed.len()
    }
}

fn push_entry(
    summary: &mut MenuSummary,
    preview: &MenuPreview,
    category: &str,
    subcategory: Option<&str>,
    product_id: &str,
) {
    let fallback = MenuProduct {
        name: "Unknown Product".to_string(),
        plu: String::new(),
        snoozed: false,
    };
    let product = preview.products.get(product_id).unwrap_or(&fallback);
    let entry = MenuEntry {
        category: category.to_string(),
        subcategory: subcategory.map(ToString::to_string),
        product_name: product.name.clone(),
        plu: product.plu.clone(),
        product_id: product_id.to_string(),
    };
    if product.snoozed {
        summary.snoozed.push(entry);
    } else {
        summary.active.push(entry);
    }
}

/// Count categories, subcategories, and active/snoozed items in a preview.
#[must_use]
pub fn summarize_menu(preview: &MenuPreview) -> MenuSummary {
    let mut summary = MenuSummary {
        categories: preview.categories.len(),
        ..MenuSummary::default()
    };

    for category in &preview.categories {
        summary.subcategories += category.sub_categories.len();
        for subcategory in &category.sub_categories {
            for product_id in &subcategory.products {
                push_entry(
                    &mut summary,
                    preview,
                    &category.name,
                    Some(&subcategory.name),
                    product_id,
                );
            }
        }
        for product_id in &category.products {
            push_entry(&mut summary, preview, &category.name, None, product_id);
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MenuCategory, MenuSubCategory};
    use std::collections::HashMap;

    fn preview() -> MenuPreview {
        let mut products = HashMap::new();
        products.insert(
            "p1".to_string(),
            MenuProduct {
                name: "Cola".to_string(),
                plu: "123".to_string(),
                snoozed: false,
            },
        );
        products.insert(
            "p2".to_string(),
            MenuProduct {
                name: "Chips".to_string(),
                plu: "456".to_string(),
                snoozed: true,
            },
        );
        MenuPreview {
            products,
            categories: vec![MenuCategory {
                name: "Drinks".to_string(),
                sub_categories: vec![MenuSubCategory {
                    name: "Soft".to_string(),
                    products: vec!["p1".to_string(), "p2".to_string()],
                }],
                products: vec!["p3".to_string()],
            }],
        }
    }

    #[test]
    fn test_summarize_counts_active_and_snoozed() {
        let summary = summarize_menu(&preview());
        assert_eq!(summary.categories, 1);
        assert_eq!(summary.subcategories, 1);
        // p1 active, p2 snoozed, p3 dangling (counted active with placeholders)
        assert_eq!(summary.active_items(), 2);
        assert_eq!(summary.snoozed_items(), 1);
    }

    #[test]
    fn test_dangling_reference_gets_placeholder_details() {
        let summary = summarize_menu(&preview());
        let dangling = summary
            .active
            .iter()
            .find(|entry| entry.product_id == "p3")
            .expect("dangling product should still be counted");
        assert_eq!(dangling.product_name, "Unknown Product");
        assert_eq!(dangling.plu, "");
        assert_eq!(dangling.subcategory, None);
    }

    #[test]
    fn test_category_path_recorded_on_entries() {
        let summary = summarize_menu(&preview());
        let cola = summary
            .active
            .iter()
            .find(|entry| entry.product_id == "p1")
            .expect("cola should be counted");
        assert_eq!(cola.category, "Drinks");
        assert_eq!(cola.subcategory.as_deref(), Some("Soft"));
    }

    #[test]
    fn test_empty_preview() {
        let summary = summarize_menu(&MenuPreview::default());
        assert_eq!(summary, MenuSummary::default());
    }
}
