//! Domain types for the remote catalog/ordering platform.
//!
//! Wire shapes follow the platform's Eve-style listing envelope
//! (`_items` / `_meta`). All identifier fields are plain strings; the
//! platform does not guarantee uniqueness of `plu` across a catalog.

pub mod catalog;
pub mod inventory;
pub mod location;
pub mod menu;
pub mod page;
pub mod reports;

pub use catalog::CatalogItem;
pub use inventory::{InventoryLocation, InventoryRecord};
pub use location::{ChannelLinkGroup, Location};
pub use menu::{MenuCategory, MenuPreview, MenuProduct, MenuSubCategory};
pub use page::{Page, PageMeta};
pub use reports::{ACTION_SNOOZE, ACTION_UNSNOOZE, SnoozeEvent};
