//! CLI command implementations.

pub mod locations;
pub mod menu;
pub mod missing;
pub mod snooze;
pub mod stores;
