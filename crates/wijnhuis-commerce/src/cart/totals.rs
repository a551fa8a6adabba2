//! Centralized totals calculation.
//!
//! Cart badge, order summary and checkout shipping all call into this
//! module, so the "totals are a pure function of state" invariant holds
//! at every call site instead of being re-derived ad hoc.

use serde::{Deserialize, Serialize};

use crate::cart::LineItem;
use crate::checkout::{shipping_cost, DiscountCode, ShippingMethod};
use crate::money::Money;

/// Subtotal at or above which standard shipping is free.
pub const FREE_SHIPPING_THRESHOLD: Money = Money::from_cents(3500);

/// Derived cart totals, assuming standard shipping.
///
/// Recomputed from the lines on every read; no code path stores or
/// mutates these directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Sum of quantities over all lines.
    pub item_count: u32,
    /// Sum of price × quantity.
    pub subtotal: Money,
    /// Standard shipping cost for this subtotal.
    pub shipping: Money,
    /// Subtotal plus shipping.
    pub total: Money,
}

/// Full order totals including discount and the chosen shipping method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    /// Sum of quantities over all lines.
    pub item_count: u32,
    /// Sum of price × quantity.
    pub subtotal: Money,
    /// Discount reduction for the current subtotal.
    pub discount: Money,
    /// Shipping cost for the chosen method.
    pub shipping: Money,
    /// Subtotal minus discount plus shipping.
    pub total: Money,
}

/// Totals as shown on the cart itself: standard shipping, no discount.
pub fn cart_totals(items: &[LineItem]) -> CartTotals {
    let totals = order_totals(items, None, ShippingMethod::Standard);
    CartTotals {
        item_count: totals.item_count,
        subtotal: totals.subtotal,
        shipping: totals.shipping,
        total: totals.total,
    }
}

/// The one pure totals function: (lines, discount, method) → totals.
pub fn order_totals(
    items: &[LineItem],
    discount: Option<&DiscountCode>,
    method: ShippingMethod,
) -> OrderTotals {
    let item_count = items.iter().map(|l| l.quantity).sum();
    let subtotal: Money = items.iter().map(LineItem::line_total).sum();
    let discount_amount = discount
        .map(|d| d.amount(subtotal))
        .unwrap_or_else(Money::zero);
    let shipping = shipping_cost(method, subtotal);
    let total = subtotal - discount_amount + shipping;

    OrderTotals {
        item_count,
        subtotal,
        discount: discount_amount,
        shipping,
        total,
    }
}
