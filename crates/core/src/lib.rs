//! Retail Ops Core - Shared types and the reconciliation engine.
//!
//! This crate provides the domain types used across all Retail Ops components:
//! - `client` - REST client for the remote catalog/ordering platform
//! - `cli` - Command-line operator tools
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no async. The reconciliation engine in [`recon`] operates on
//! collections that the caller has already fully materialized.
//!
//! # Modules
//!
//! - [`types`] - Catalog, inventory, location, and listing-envelope types
//! - [`recon`] - Missing-inventory reconciliation engine
//! - [`menu`] - Menu-preview item counting

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod menu;
pub mod recon;
pub mod types;

pub use types::*;
