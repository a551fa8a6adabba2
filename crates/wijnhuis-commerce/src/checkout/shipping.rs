//! Shipping methods, costs and delivery estimates.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::cart::FREE_SHIPPING_THRESHOLD;
use crate::money::Money;

/// Available shipping methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ShippingMethod {
    /// Regular parcel delivery.
    #[default]
    Standard,
    /// Refrigerated transport for heat-sensitive bottles.
    TemperatureControlled,
    /// Next-day evening delivery.
    Evening,
}

impl ShippingMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "standard",
            ShippingMethod::TemperatureControlled => "temperature-controlled",
            ShippingMethod::Evening => "evening",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "Standaard bezorging",
            ShippingMethod::TemperatureControlled => "Gekoeld transport",
            ShippingMethod::Evening => "Avondlevering",
        }
    }

    /// Flat rate before any free-shipping rule.
    pub fn base_cost(&self) -> Money {
        match self {
            ShippingMethod::Standard => Money::from_cents(495),
            ShippingMethod::TemperatureControlled => Money::from_cents(995),
            ShippingMethod::Evening => Money::from_cents(795),
        }
    }

    /// Business days between ordering and delivery.
    pub fn delivery_days(&self) -> u32 {
        match self {
            ShippingMethod::Standard | ShippingMethod::TemperatureControlled => 2,
            ShippingMethod::Evening => 1,
        }
    }
}

/// Shipping cost for a method given the current cart subtotal.
///
/// Standard shipping is free at or above the free-shipping threshold;
/// the other methods always charge their flat rate.
pub fn shipping_cost(method: ShippingMethod, subtotal: Money) -> Money {
    if method == ShippingMethod::Standard && subtotal >= FREE_SHIPPING_THRESHOLD {
        Money::zero()
    } else {
        method.base_cost()
    }
}

/// Estimated delivery date: walk forward the method's number of business
/// days from `from`, skipping Saturdays and Sundays. The result is never
/// a weekend day.
pub fn estimated_delivery(from: NaiveDate, method: ShippingMethod) -> NaiveDate {
    let mut date = from;
    let mut remaining = method.delivery_days();

    while remaining > 0 {
        date += Duration::days(1);
        if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            remaining -= 1;
        }
    }

    date
}

/// Format a delivery date for display, e.g. "maandag 25 augustus".
pub fn format_delivery_date(date: NaiveDate) -> String {
    const DAYS: [&str; 7] = [
        "maandag",
        "dinsdag",
        "woensdag",
        "donderdag",
        "vrijdag",
        "zaterdag",
        "zondag",
    ];
    const MONTHS: [&str; 12] = [
        "januari",
        "februari",
        "maart",
        "april",
        "mei",
        "juni",
        "juli",
        "augustus",
        "september",
        "oktober",
        "november",
        "december",
    ];

    let day_name = DAYS[date.weekday().num_days_from_monday() as usize];
    let month_name = MONTHS[date.month0() as usize];
    format!("{} {} {}", day_name, date.day(), month_name)
}
