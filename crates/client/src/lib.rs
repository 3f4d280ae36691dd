//! REST client for the remote catalog/ordering platform.
//!
//! Wraps the platform's Eve-style Admin API: OAuth client-credentials
//! authentication with a cached, lazily refreshed token; page-based
//! listing pagination; and one module per endpoint family (locations,
//! catalog items, inventory, channel links, store availability, operation
//! reports, menu previews).
//!
//! # Example
//!
//! ```rust,ignore
//! use retail_ops_client::{ApiClient, ApiConfig};
//!
//! let config = ApiConfig::from_env()?;
//! let client = ApiClient::new(&config)?;
//!
//! let items = client.list_items("6929b2df534c927a631cd6b1").await?;
//! let inventory = client.list_inventory("6929b2df534c927a631cd6b1", None).await?;
//! ```
//!
//! All listing methods fully materialize their results before returning,
//! so downstream consumers (the reconciliation engine in particular) never
//! see partial pagination.

#![cfg_attr(not(test), forbid(unsafe_code))]

mod auth;
mod catalog;
mod channels;
mod client;
mod config;
mod error;
mod inventory;
mod locations;
mod menu;
mod paging;
mod reports;
mod stores;

pub use auth::TokenCache;
pub use client::ApiClient;
pub use config::{ApiConfig, ConfigError};
pub use error::ApiError;
pub use reports::{DEFAULT_OPERATION_TYPES, SnoozeQuery};
pub use stores::{BusyModeSweep, StoreMode};
