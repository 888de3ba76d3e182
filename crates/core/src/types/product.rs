//! Catalog product projection.
//!
//! The catalog is owned by the managed backend; the cart carries this
//! projection verbatim inside line items and never mutates it.

use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::price::Price;

/// A product as seen by the cart: an opaque ID plus the display and price
/// fields the storefront needs to render a line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Backend-assigned product ID.
    pub id: ProductId,
    /// Display name (e.g., "Linen Wrap Dress").
    pub name: String,
    /// URL slug for product page links.
    pub handle: String,
    /// Unit price.
    pub price: Price,
    /// Primary image URL, if the product has one.
    pub image_url: Option<String>,
}

impl Product {
    /// Create a new product projection.
    #[must_use]
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        handle: impl Into<String>,
        price: Price,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            handle: handle.into(),
            price,
            image_url: None,
        }
    }
}
