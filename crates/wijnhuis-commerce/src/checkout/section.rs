//! Checkout wizard sections.

use serde::{Deserialize, Serialize};

/// The five sections of the checkout wizard, in canonical order.
///
/// The order is a guideline, not a gate: any section may be activated
/// at any time so a shopper can go back and edit an earlier step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutSection {
    /// Contact information.
    #[default]
    Contact,
    /// Delivery address.
    Delivery,
    /// Gift options.
    Gift,
    /// Shipping method.
    Shipping,
    /// Payment method and age verification.
    Payment,
}

impl CheckoutSection {
    /// All sections in canonical order.
    pub const ALL: [CheckoutSection; 5] = [
        CheckoutSection::Contact,
        CheckoutSection::Delivery,
        CheckoutSection::Gift,
        CheckoutSection::Shipping,
        CheckoutSection::Payment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutSection::Contact => "contact",
            CheckoutSection::Delivery => "delivery",
            CheckoutSection::Gift => "gift",
            CheckoutSection::Shipping => "shipping",
            CheckoutSection::Payment => "payment",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutSection::Contact => "Contactgegevens",
            CheckoutSection::Delivery => "Bezorgadres",
            CheckoutSection::Gift => "Cadeau-opties",
            CheckoutSection::Shipping => "Verzending",
            CheckoutSection::Payment => "Betaling",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutSection::Contact => 1,
            CheckoutSection::Delivery => 2,
            CheckoutSection::Gift => 3,
            CheckoutSection::Shipping => 4,
            CheckoutSection::Payment => 5,
        }
    }

    /// The section after this one in canonical order.
    pub fn next(&self) -> Option<CheckoutSection> {
        match self {
            CheckoutSection::Contact => Some(CheckoutSection::Delivery),
            CheckoutSection::Delivery => Some(CheckoutSection::Gift),
            CheckoutSection::Gift => Some(CheckoutSection::Shipping),
            CheckoutSection::Shipping => Some(CheckoutSection::Payment),
            CheckoutSection::Payment => None,
        }
    }
}
