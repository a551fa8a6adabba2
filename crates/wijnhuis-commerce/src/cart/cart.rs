//! Cart and line item types.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cart::{cart_totals, CartTotals};
use crate::catalog::Product;
use crate::ids::{LineItemId, ProductId};
use crate::money::Money;

/// A line item in the cart.
///
/// The line has its own identity, distinct from the product id: adding
/// the same wine twice merges into one line rather than creating two.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Unique line item identifier, generated at add-time.
    pub id: LineItemId,
    /// The product on this line (denormalized snapshot).
    pub product: Product,
    /// Quantity, always >= 1 while the line exists.
    pub quantity: u32,
}

impl LineItem {
    /// Create a new line for a product.
    pub fn new(product: Product, quantity: u32) -> Self {
        Self {
            id: LineItemId::generate(),
            product,
            quantity,
        }
    }

    /// Line subtotal (price × quantity).
    pub fn line_total(&self) -> Money {
        self.product.price.multiply(i64::from(self.quantity))
    }
}

/// The shopping cart.
///
/// Pure in-memory structural edits: the cart validates neither stock nor
/// price, that is the catalog provider's responsibility. Totals are
/// derived on demand and never stored, so they cannot drift from the
/// lines.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<LineItem>,
    /// UI visibility flag: adding an item always surfaces the cart.
    pub is_open: bool,
}

impl Cart {
    /// Create an empty, closed cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from persisted line items.
    pub fn from_items(items: impl Into<Vec<LineItem>>) -> Self {
        Self {
            items: items.into(),
            is_open: false,
        }
    }

    /// Add a product to the cart.
    ///
    /// If a line for the same product id exists, its quantity is
    /// incremented; otherwise a new line is created. Opens the cart.
    /// A non-positive quantity is the caller's mistake, not checked here.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> LineItemId {
        debug_assert!(quantity > 0, "quantity must be positive");

        self.is_open = true;

        if let Some(existing) = self.items.iter_mut().find(|l| l.product.id == product.id) {
            existing.quantity += quantity;
            debug!(
                product = %product.id,
                quantity = existing.quantity,
                "merged into existing line"
            );
            return existing.id.clone();
        }

        let line = LineItem::new(product.clone(), quantity);
        let id = line.id.clone();
        debug!(product = %product.id, quantity, "added new line");
        self.items.push(line);
        id
    }

    /// Remove a line unconditionally. Removing a missing line is a no-op.
    pub fn remove_item(&mut self, line_id: &LineItemId) {
        self.items.retain(|l| &l.id != line_id);
    }

    /// Replace a line's quantity. A quantity below 1 removes the line.
    pub fn update_quantity(&mut self, line_id: &LineItemId, quantity: i64) {
        if quantity < 1 {
            self.remove_item(line_id);
            return;
        }
        if let Some(line) = self.items.iter_mut().find(|l| &l.id == line_id) {
            line.quantity = quantity as u32;
        }
    }

    /// Empty the cart.
    ///
    /// Only to be called after an order is confirmed; clearing before
    /// confirmation would lose the cart on a failed submission.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Open or close the cart drawer.
    pub fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }

    /// Derived totals for the current lines (standard shipping assumed).
    pub fn totals(&self) -> CartTotals {
        cart_totals(&self.items)
    }

    /// Sum of price × quantity over current lines.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// The current lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Product ids currently in the cart, for recommendations.
    pub fn product_ids(&self) -> Vec<ProductId> {
        self.items.iter().map(|l| l.product.id.clone()).collect()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
