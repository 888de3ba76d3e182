//! Juniper Row Core - Shared types library.
//!
//! This crate provides common types used across all Juniper Row components:
//! - `cart` - Client-side shopping cart aggregate
//! - `cli` - Command-line tools for inspecting and driving a cart
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, colors, and
//!   catalog product projections

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
