//! The cart aggregate: mutation rules, derived totals, persistence.

use rust_decimal::Decimal;

use juniper_row_core::{ColorChoice, Product, ProductId};

use crate::line_item::{LineItem, LineKey};
use crate::snapshot::{Snapshot, SnapshotStore};

/// The shopping cart for one storefront session.
///
/// Construct once over a [`SnapshotStore`] at application start and inject
/// wherever mutations or totals are needed. All mutations are synchronous
/// and apply in call order; after each one the full item sequence is
/// written back to the store.
///
/// # Granularity
///
/// [`add`](Self::add) merges per variant - the `(product id, size, color
/// name)` key - while [`remove`](Self::remove) and
/// [`update_quantity`](Self::update_quantity) operate per product,
/// touching every variant of that product at once. The asymmetry is the
/// contract: the cart page offers product-level controls while the product
/// page adds specific variants.
pub struct Cart<S: SnapshotStore> {
    items: Vec<LineItem>,
    is_open: bool,
    store: S,
}

impl<S: SnapshotStore> Cart<S> {
    /// Build a cart over `store`, rehydrating any prior snapshot.
    ///
    /// A missing snapshot starts an empty cart. So does a corrupt one: the
    /// snapshot is a session-local cache, not a source of truth, so an
    /// unreadable slot is logged and discarded rather than surfaced.
    pub fn open(store: S) -> Self {
        let mut items = match store.load() {
            Ok(Some(snapshot)) => snapshot.items,
            Ok(None) => Vec::new(),
            Err(error) => {
                tracing::warn!(%error, "discarding unreadable cart snapshot");
                Vec::new()
            }
        };

        // Zero-quantity lines are never written, but the slot is editable
        // by anything on the device; drop them on the way in.
        items.retain(|line| line.quantity >= 1);

        Self {
            items,
            is_open: false,
            store,
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add `quantity` of a product variant.
    ///
    /// If a line item with the same `(product id, size, color name)` key
    /// already exists its quantity is incremented; otherwise a new line is
    /// appended. Either way the cart flips open so the UI can show the
    /// addition.
    ///
    /// A zero quantity is invalid input and the call is a no-op: the cart
    /// never stores a line at quantity zero.
    pub fn add(
        &mut self,
        product: Product,
        quantity: u32,
        size: Option<String>,
        color: Option<ColorChoice>,
    ) {
        if quantity == 0 {
            tracing::debug!(product_id = %product.id, "ignoring add with zero quantity");
            return;
        }

        let key = LineKey {
            product_id: &product.id,
            size: size.as_deref(),
            color_name: color.as_ref().map(|choice| choice.name.as_str()),
        };

        if let Some(line) = self.items.iter_mut().find(|line| line.key() == key) {
            line.quantity = line.quantity.saturating_add(quantity);
            tracing::debug!(product_id = %product.id, quantity = line.quantity, "merged cart line");
        } else {
            tracing::debug!(product_id = %product.id, quantity, "appended cart line");
            self.items.push(LineItem {
                product,
                quantity,
                selected_size: size,
                selected_color: color,
            });
        }

        self.is_open = true;
        self.persist();
    }

    /// Remove every line item for a product, regardless of variant.
    pub fn remove(&mut self, product_id: &ProductId) {
        let before = self.items.len();
        self.items.retain(|line| line.product.id != *product_id);
        tracing::debug!(%product_id, removed = before - self.items.len(), "removed product from cart");
        self.persist();
    }

    /// Set the quantity of every line item for a product.
    ///
    /// Zero removes the product entirely, same as [`remove`](Self::remove).
    /// A product in the cart as two variants has both set to `quantity`.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }

        for line in self
            .items
            .iter_mut()
            .filter(|line| line.product.id == *product_id)
        {
            line.quantity = quantity;
        }
        tracing::debug!(%product_id, quantity, "updated cart quantity");
        self.persist();
    }

    /// Empty the cart unconditionally and persist the empty state.
    pub fn clear(&mut self) {
        self.items.clear();
        tracing::debug!("cleared cart");
        self.persist();
    }

    /// Hide the cart panel. Transient UI state; never persisted.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Whether the cart panel should be visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Total quantity across all lines. Recomputed on every call.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Sum of `unit price * quantity` across all lines. Recomputed on
    /// every call; carts are small so O(n) reads beat cache invalidation.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Write the current item sequence back to the store.
    ///
    /// Save failures are logged and swallowed: the in-memory cart stays
    /// authoritative for this session and mutations never fail.
    fn persist(&self) {
        let snapshot = Snapshot {
            items: self.items.clone(),
        };
        if let Err(error) = self.store.save(&snapshot) {
            tracing::error!(%error, "failed to persist cart snapshot");
        }
    }
}
