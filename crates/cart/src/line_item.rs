//! Cart line items and their dedup identity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use juniper_row_core::{ColorChoice, Product, ProductId};

/// One cart entry: a catalog product plus quantity and the variant
/// selections made on the product page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Catalog projection, carried verbatim from the product page.
    pub product: Product,
    /// Always >= 1; a line that would drop to zero is removed instead.
    pub quantity: u32,
    /// Size variant, if the product has sizes.
    pub selected_size: Option<String>,
    /// Color variant, if the product has colors.
    pub selected_color: Option<ColorChoice>,
}

impl LineItem {
    /// The identity used to decide whether an addition merges into this
    /// line: `(product id, size, color name)`.
    ///
    /// A `None` size or color is a distinct "no selection" value, not a
    /// wildcard. The color hex is display-only and excluded.
    #[must_use]
    pub fn key(&self) -> LineKey<'_> {
        LineKey {
            product_id: &self.product.id,
            size: self.selected_size.as_deref(),
            color_name: self
                .selected_color
                .as_ref()
                .map(|color| color.name.as_str()),
        }
    }

    /// Extended price for this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price.amount * Decimal::from(self.quantity)
    }
}

/// Borrowed dedup key for a line item.
///
/// Two `add` calls with equal keys merge into one line; unequal keys
/// produce distinct lines even for the same product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineKey<'a> {
    pub product_id: &'a ProductId,
    pub size: Option<&'a str>,
    pub color_name: Option<&'a str>,
}
