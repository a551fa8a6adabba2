//! Best-effort persistence of cart and checkout state.
//!
//! Snapshots go through [`wijnhuis_store::Store`]. Loading is lenient:
//! a missing or corrupt snapshot falls back to a fresh default, because
//! losing a saved cart must never break the storefront. Saving surfaces
//! its error so the caller can log it.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cart::{Cart, LineItem};
use crate::checkout::{
    CheckoutSession, ContactDetails, DeliveryAddress, DiscountCode, GiftOptions, PaymentDetails,
    ShippingDetails,
};
use crate::error::StorefrontError;
use crate::money::Money;
use wijnhuis_store::Store;

/// Store key for the cart snapshot.
pub const CART_KEY: &str = "wijnhuis:cart";
/// Store key for the checkout snapshot.
pub const CHECKOUT_KEY: &str = "wijnhuis:checkout";

/// Persisted cart shape.
///
/// The totals are written for external readers of the snapshot; on load
/// they are discarded and re-derived from the lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    pub items: Vec<LineItem>,
    pub item_count: u32,
    pub subtotal: Money,
    pub shipping: Money,
    pub total: Money,
}

impl CartSnapshot {
    /// Snapshot the current cart.
    pub fn capture(cart: &Cart) -> Self {
        let totals = cart.totals();
        Self {
            items: cart.items().to_vec(),
            item_count: totals.item_count,
            subtotal: totals.subtotal,
            shipping: totals.shipping,
            total: totals.total,
        }
    }

    /// Rebuild a cart from the snapshot's lines.
    pub fn restore(self) -> Cart {
        Cart::from_items(self.items)
    }
}

/// Persisted checkout shape: the five field groups and the applied code.
///
/// Wizard position, completion marks and validation errors are session
/// state, not worth surviving a reload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSnapshot {
    pub contact: ContactDetails,
    pub address: DeliveryAddress,
    pub gift: GiftOptions,
    pub shipping: ShippingDetails,
    pub payment: PaymentDetails,
    pub discount: Option<DiscountCode>,
}

impl CheckoutSnapshot {
    /// Snapshot the current session's field groups.
    pub fn capture(session: &CheckoutSession) -> Self {
        Self {
            contact: session.contact.clone(),
            address: session.address.clone(),
            gift: session.gift.clone(),
            shipping: session.shipping.clone(),
            payment: session.payment.clone(),
            discount: session.discount().cloned(),
        }
    }

    /// Rebuild a fresh session carrying the snapshot's field groups.
    pub fn restore(self) -> CheckoutSession {
        CheckoutSession::from_parts(
            self.contact,
            self.address,
            self.gift,
            self.shipping,
            self.payment,
            self.discount,
        )
    }
}

/// Persist the cart.
pub fn save_cart(store: &Store, cart: &Cart) -> Result<(), StorefrontError> {
    store.set(CART_KEY, &CartSnapshot::capture(cart))?;
    Ok(())
}

/// Load the persisted cart, falling back to an empty one.
pub fn load_cart(store: &Store) -> Cart {
    match store.get::<CartSnapshot>(CART_KEY) {
        Ok(Some(snapshot)) => snapshot.restore(),
        Ok(None) => Cart::new(),
        Err(err) => {
            warn!(error = %err, "could not load saved cart, starting empty");
            Cart::new()
        }
    }
}

/// Persist the checkout field groups.
pub fn save_checkout(store: &Store, session: &CheckoutSession) -> Result<(), StorefrontError> {
    store.set(CHECKOUT_KEY, &CheckoutSnapshot::capture(session))?;
    Ok(())
}

/// Load the persisted checkout, falling back to a fresh session.
pub fn load_checkout(store: &Store) -> CheckoutSession {
    match store.get::<CheckoutSnapshot>(CHECKOUT_KEY) {
        Ok(Some(snapshot)) => snapshot.restore(),
        Ok(None) => CheckoutSession::new(),
        Err(err) => {
            warn!(error = %err, "could not load saved checkout, starting fresh");
            CheckoutSession::new()
        }
    }
}

/// Drop both snapshots, typically after an order is confirmed.
pub fn clear(store: &Store) -> Result<(), StorefrontError> {
    store.delete(CART_KEY)?;
    store.delete(CHECKOUT_KEY)?;
    Ok(())
}
