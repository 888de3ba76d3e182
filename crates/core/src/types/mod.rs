//! Core types for Juniper Row.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod color;
pub mod id;
pub mod price;
pub mod product;

pub use color::ColorChoice;
pub use id::*;
pub use price::{CurrencyCode, Price};
pub use product::Product;
