//! Shopping cart module.
//!
//! Contains the cart engine, line items, and the centralized totals
//! calculation used everywhere totals are shown.

mod cart;
mod totals;

pub use cart::{Cart, LineItem};
pub use totals::{
    cart_totals, order_totals, CartTotals, OrderTotals, FREE_SHIPPING_THRESHOLD,
};
