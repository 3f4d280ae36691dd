//! Menu-preview wire types.
//!
//! The menu preview endpoint returns the assembled menu for one
//! account/menu/location/channel combination: a flat `products` map keyed
//! by product ID, and a `categories` tree referencing products by ID either
//! directly on a category or through its subcategories.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A product entry in the preview's flat products map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuProduct {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Product lookup unit identifier.
    #[serde(default)]
    pub plu: String,
    /// Whether the product is currently snoozed (hidden from ordering).
    #[serde(default)]
    pub snoozed: bool,
}

/// A subcategory holding product references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSubCategory {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Product IDs in this subcategory.
    #[serde(default)]
    pub products: Vec<String>,
}

/// A top-level menu category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategory {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Subcategories, for nested menu structures.
    #[serde(default, rename = "subCategories")]
    pub sub_categories: Vec<MenuSubCategory>,
    /// Product IDs attached directly to the category.
    #[serde(default)]
    pub products: Vec<String>,
}

/// The assembled menu preview.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuPreview {
    /// All products referenced by the menu, keyed by product ID.
    #[serde(default)]
    pub products: HashMap<String, MenuProduct>,
    /// Category tree.
    #[serde(default)]
    pub categories: Vec<MenuCategory>,
}
