//! Checkout: the five-section wizard, validation, discount codes,
//! shipping and order submission.

mod discount;
mod fields;
mod gateway;
mod lookup;
mod section;
mod session;
mod shipping;
pub mod validate;

pub use discount::{DiscountCode, DiscountRegistry, DiscountValue};
pub use fields::{
    AddressPatch, ContactDetails, ContactPatch, DeliveryAddress, GiftOptions, GiftPatch,
    PaymentDetails, PaymentMethod, PaymentPatch, ShippingDetails, ShippingPatch,
};
pub use gateway::{MockOrderGateway, OrderConfirmation, OrderGateway, OrderRequest};
pub use lookup::{AddressLookup, AddressMatch, MockAddressLookup};
pub use section::CheckoutSection;
pub use session::CheckoutSession;
pub use shipping::{estimated_delivery, format_delivery_date, shipping_cost, ShippingMethod};
