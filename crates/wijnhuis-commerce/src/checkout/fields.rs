//! The five checkout field groups and their partial-update patches.
//!
//! Setters on the session merge a patch into the group: fields present
//! in the patch replace the current value, everything else is left
//! untouched. That mirrors form inputs writing one field at a time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::checkout::ShippingMethod;

/// Contact information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

/// Partial contact update.
#[derive(Debug, Clone, Default)]
pub struct ContactPatch {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}

impl ContactDetails {
    /// Shallow-merge a patch into this group.
    pub fn apply(&mut self, patch: ContactPatch) {
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
    }
}

/// Delivery address.
///
/// `is_manual_entry` distinguishes lookup-derived street/city values
/// from ones the shopper typed after a failed lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryAddress {
    pub postcode: String,
    pub house_number: String,
    pub house_number_addition: String,
    pub street: String,
    pub city: String,
    pub is_manual_entry: bool,
}

/// Partial address update.
#[derive(Debug, Clone, Default)]
pub struct AddressPatch {
    pub postcode: Option<String>,
    pub house_number: Option<String>,
    pub house_number_addition: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub is_manual_entry: Option<bool>,
}

impl DeliveryAddress {
    /// Shallow-merge a patch into this group.
    pub fn apply(&mut self, patch: AddressPatch) {
        if let Some(postcode) = patch.postcode {
            self.postcode = postcode;
        }
        if let Some(house_number) = patch.house_number {
            self.house_number = house_number;
        }
        if let Some(addition) = patch.house_number_addition {
            self.house_number_addition = addition;
        }
        if let Some(street) = patch.street {
            self.street = street;
        }
        if let Some(city) = patch.city {
            self.city = city;
        }
        if let Some(manual) = patch.is_manual_entry {
            self.is_manual_entry = manual;
        }
    }
}

/// Gift options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftOptions {
    pub is_gift: bool,
    pub wrap: bool,
    pub message: String,
}

/// Partial gift update.
#[derive(Debug, Clone, Default)]
pub struct GiftPatch {
    pub is_gift: Option<bool>,
    pub wrap: Option<bool>,
    pub message: Option<String>,
}

impl GiftOptions {
    /// Shallow-merge a patch into this group.
    pub fn apply(&mut self, patch: GiftPatch) {
        if let Some(is_gift) = patch.is_gift {
            self.is_gift = is_gift;
        }
        if let Some(wrap) = patch.wrap {
            self.wrap = wrap;
        }
        if let Some(message) = patch.message {
            self.message = message;
        }
    }
}

/// Chosen shipping method with its derived delivery estimate.
///
/// The estimate is derived state; the session recomputes it whenever
/// the method changes rather than trusting a cached value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDetails {
    pub method: ShippingMethod,
    pub estimated_date: Option<NaiveDate>,
}

/// Partial shipping update.
#[derive(Debug, Clone, Default)]
pub struct ShippingPatch {
    pub method: Option<ShippingMethod>,
}

/// Payment method choices offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Ideal,
    Card,
    Paypal,
    Klarna,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Ideal => "ideal",
            PaymentMethod::Card => "card",
            PaymentMethod::Paypal => "paypal",
            PaymentMethod::Klarna => "klarna",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Ideal => "iDEAL",
            PaymentMethod::Card => "Creditcard",
            PaymentMethod::Paypal => "PayPal",
            PaymentMethod::Klarna => "Klarna",
        }
    }
}

/// Payment details.
///
/// Selling alcohol requires an explicit 18+ confirmation; `age_verified`
/// must be exactly `true` for the order to validate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    pub method: Option<PaymentMethod>,
    pub age_verified: bool,
}

/// Partial payment update.
#[derive(Debug, Clone, Default)]
pub struct PaymentPatch {
    pub method: Option<PaymentMethod>,
    pub age_verified: Option<bool>,
}

impl PaymentDetails {
    /// Shallow-merge a patch into this group.
    pub fn apply(&mut self, patch: PaymentPatch) {
        if let Some(method) = patch.method {
            self.method = Some(method);
        }
        if let Some(age_verified) = patch.age_verified {
            self.age_verified = age_verified;
        }
    }
}
