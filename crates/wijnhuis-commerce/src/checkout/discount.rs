//! Discount codes and the known-code registry.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ids::DiscountId;
use crate::money::Money;

/// Artificial round-trip delay for the mocked code lookup.
const LOOKUP_DELAY: Duration = Duration::from_millis(200);

/// How a discount reduces the order value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountValue {
    /// Percentage off the subtotal (0.0 - 100.0).
    Percentage(f64),
    /// Fixed amount off.
    Fixed(Money),
}

/// A discount code definition. At most one is applied to a checkout at a
/// time; applying a new one replaces the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountCode {
    /// Unique discount identifier.
    pub id: DiscountId,
    /// The code a shopper types (stored uppercase).
    pub code: String,
    /// The reduction.
    pub value: DiscountValue,
    /// Minimum subtotal for the code to count.
    pub minimum_order: Option<Money>,
}

impl DiscountCode {
    /// Create a percentage code.
    pub fn percentage(code: impl Into<String>, percent: f64) -> Self {
        Self {
            id: DiscountId::generate(),
            code: code.into().to_uppercase(),
            value: DiscountValue::Percentage(percent),
            minimum_order: None,
        }
    }

    /// Create a fixed-amount code.
    pub fn fixed(code: impl Into<String>, amount: Money) -> Self {
        Self {
            id: DiscountId::generate(),
            code: code.into().to_uppercase(),
            value: DiscountValue::Fixed(amount),
            minimum_order: None,
        }
    }

    /// Require a minimum subtotal.
    pub fn with_minimum_order(mut self, minimum: Money) -> Self {
        self.minimum_order = Some(minimum);
        self
    }

    /// Check whether the subtotal satisfies the minimum-order rule.
    pub fn applies_to(&self, subtotal: Money) -> bool {
        self.minimum_order
            .map(|min| subtotal >= min)
            .unwrap_or(true)
    }

    /// The reduction for a given subtotal, computed at summary time.
    ///
    /// Never stored as an absolute value: the subtotal can change after
    /// the code is applied. A code whose minimum is no longer met, or a
    /// fixed amount above the subtotal, is clamped rather than removed.
    pub fn amount(&self, subtotal: Money) -> Money {
        if !self.applies_to(subtotal) {
            return Money::zero();
        }
        match self.value {
            DiscountValue::Percentage(percent) => subtotal.percentage(percent),
            DiscountValue::Fixed(amount) => amount.cap(subtotal),
        }
    }
}

/// The set of codes the shop currently honors.
///
/// Lookup models a network round-trip to the commerce platform, hence
/// async with a small artificial delay.
#[derive(Debug, Clone)]
pub struct DiscountRegistry {
    codes: Vec<DiscountCode>,
}

impl DiscountRegistry {
    /// Registry with the shop's standing codes.
    pub fn standard() -> Self {
        Self {
            codes: vec![
                DiscountCode::percentage("WELKOM10", 10.0),
                DiscountCode::fixed("PROEFDOOS5", Money::from_cents(500)),
                DiscountCode::percentage("WIJNGILDE15", 15.0)
                    .with_minimum_order(Money::from_cents(7500)),
            ],
        }
    }

    /// Registry with custom codes (tests, campaigns).
    pub fn new(codes: impl Into<Vec<DiscountCode>>) -> Self {
        Self {
            codes: codes.into(),
        }
    }

    /// Look up a code case-insensitively.
    pub async fn lookup(&self, input: &str) -> Option<DiscountCode> {
        tokio::time::sleep(LOOKUP_DELAY).await;

        let input = input.trim();
        let found = self
            .codes
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(input))
            .cloned();
        debug!(code = input, matched = found.is_some(), "discount lookup");
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_amount() {
        let code = DiscountCode::percentage("WELKOM10", 10.0);
        assert_eq!(code.amount(Money::from_cents(10000)).cents, 1000);
    }

    #[test]
    fn test_fixed_amount_capped_at_subtotal() {
        let code = DiscountCode::fixed("PROEFDOOS5", Money::from_cents(500));
        assert_eq!(code.amount(Money::from_cents(10000)).cents, 500);
        assert_eq!(code.amount(Money::from_cents(300)).cents, 300);
    }

    #[test]
    fn test_minimum_order_gates_amount() {
        let code = DiscountCode::percentage("WIJNGILDE15", 15.0)
            .with_minimum_order(Money::from_cents(7500));

        assert!(!code.applies_to(Money::from_cents(7499)));
        assert_eq!(code.amount(Money::from_cents(7499)).cents, 0);

        assert!(code.applies_to(Money::from_cents(7500)));
        assert_eq!(code.amount(Money::from_cents(7500)).cents, 1125);
    }

    #[test]
    fn test_code_stored_uppercase() {
        let code = DiscountCode::percentage("welkom10", 10.0);
        assert_eq!(code.code, "WELKOM10");
    }

    #[tokio::test]
    async fn test_lookup_is_case_insensitive() {
        let registry = DiscountRegistry::standard();
        let found = registry.lookup("welkom10").await;
        assert_eq!(found.unwrap().code, "WELKOM10");
    }

    #[tokio::test]
    async fn test_lookup_trims_whitespace() {
        let registry = DiscountRegistry::standard();
        assert!(registry.lookup("  WELKOM10  ").await.is_some());
    }

    #[tokio::test]
    async fn test_lookup_unknown_code_returns_none() {
        let registry = DiscountRegistry::standard();
        assert!(registry.lookup("NIETBESTAAND").await.is_none());
    }
}
