//! Juniper Row Cart - Client-side shopping cart aggregate.
//!
//! The cart is the list of line items one storefront session intends to
//! purchase. It owns the merge/update/removal rules, derives totals on
//! demand, and persists a snapshot of its item sequence to a key-value
//! store after every mutation.
//!
//! The cart is a best-effort, locally cached view of intent - not a
//! transactional ledger. All durable commerce state (inventory, orders,
//! payment) lives in the managed backend.
//!
//! # Design
//!
//! - [`Cart`] is an explicitly constructed aggregate: build it over any
//!   [`SnapshotStore`] at application start and inject it into whatever
//!   needs it. There is no ambient global.
//! - Persistence is a capability: [`MemoryStore`] for tests and ephemeral
//!   sessions, [`JsonFileStore`] for a real on-device snapshot.
//! - Mutations are synchronous and single-threaded; concurrent holders of
//!   the same backing store are independent copies and the last write wins.
//!
//! # Example
//!
//! ```rust
//! use juniper_row_cart::{Cart, MemoryStore};
//! use juniper_row_core::{CurrencyCode, Price, Product};
//! use rust_decimal::Decimal;
//!
//! let product = Product::new(
//!     "prod_1",
//!     "Linen Wrap Dress",
//!     "linen-wrap-dress",
//!     Price::from_minor_units(12_800, CurrencyCode::USD),
//! );
//!
//! let mut cart = Cart::open(MemoryStore::new());
//! cart.add(product, 2, Some("M".into()), None);
//! assert_eq!(cart.total_items(), 2);
//! assert_eq!(cart.total_price(), Decimal::new(256, 0));
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod cart;
mod error;
mod file_store;
mod line_item;
mod snapshot;

pub use cart::Cart;
pub use error::SnapshotError;
pub use file_store::JsonFileStore;
pub use line_item::{LineItem, LineKey};
pub use snapshot::{MemoryStore, Snapshot, SnapshotStore};
