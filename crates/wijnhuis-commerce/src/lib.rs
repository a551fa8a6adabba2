//! Core commerce engine for the Wijnhuis wine storefront.
//!
//! This crate owns the client-side shopping state: the cart and its
//! derived totals, the five-section checkout wizard with validation and
//! discount codes, shipping costs and delivery estimates, order
//! submission, and product recommendations. UI concerns (rendering,
//! routing, input handling) live elsewhere; this crate is the part that
//! must get the numbers and the rules right.
//!
//! # Example
//!
//! ```
//! use wijnhuis_commerce::prelude::*;
//!
//! let catalog = wijnhuis_commerce::catalog::fixtures::catalog();
//! let mut cart = Cart::new();
//! let margaux = catalog.by_id(&"wine-margaux".into()).unwrap();
//! cart.add_item(margaux, 2);
//!
//! let totals = cart.totals();
//! assert_eq!(totals.item_count, 2);
//! assert!(totals.shipping.is_zero()); // over the free-shipping threshold
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod ids;
pub mod money;
#[cfg(feature = "storage")]
pub mod persist;
pub mod recommend;

pub use cart::{Cart, CartTotals, LineItem, OrderTotals, FREE_SHIPPING_THRESHOLD};
pub use catalog::{Catalog, Product, WineType};
pub use checkout::{CheckoutSection, CheckoutSession, DiscountCode, ShippingMethod};
pub use error::StorefrontError;
pub use money::Money;

/// Common imports for storefront code.
pub mod prelude {
    pub use crate::cart::{Cart, CartTotals, LineItem, OrderTotals};
    pub use crate::catalog::{Catalog, Product, WineType};
    pub use crate::checkout::{
        AddressLookup, CheckoutSection, CheckoutSession, DiscountCode, DiscountRegistry,
        OrderGateway, PaymentMethod, ShippingMethod,
    };
    pub use crate::error::StorefrontError;
    pub use crate::ids::{LineItemId, OrderId, ProductId};
    pub use crate::money::Money;
}
