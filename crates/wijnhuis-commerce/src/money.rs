//! Money type for euro amounts.
//!
//! The storefront sells in a single currency, so amounts are plain
//! euro-cent integers. Integer cents avoid the floating-point precision
//! issues that plague monetary calculations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};

/// A monetary amount in euro cents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money {
    /// Amount in cents.
    pub cents: i64,
}

impl Money {
    /// Create a new amount from cents.
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Create an amount from a decimal euro value.
    ///
    /// ```
    /// use wijnhuis_commerce::money::Money;
    /// let price = Money::from_eur(12.95);
    /// assert_eq!(price.cents, 1295);
    /// ```
    pub fn from_eur(amount: f64) -> Self {
        Self::from_cents((amount * 100.0).round() as i64)
    }

    /// The zero amount.
    pub const fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Check if this is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.cents > 0
    }

    /// Multiply by an integer quantity.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::from_cents(self.cents * factor)
    }

    /// Calculate a percentage of this amount, rounded to the nearest cent.
    pub fn percentage(&self, percent: f64) -> Money {
        Money::from_cents((self.cents as f64 * percent / 100.0).round() as i64)
    }

    /// Clamp a reduction so it never exceeds this amount.
    pub fn cap(&self, maximum: Money) -> Money {
        Money::from_cents(self.cents.min(maximum.cents))
    }

    /// Convert to a decimal euro value.
    pub fn to_eur(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Format as a Dutch display string (e.g., "€ 34,99").
    pub fn display(&self) -> String {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.abs();
        format!("{}\u{20ac} {},{:02}", sign, abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::from_cents(self.cents + other.cents)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::from_cents(self.cents - other.cents)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
