//! Money type for representing prices.
//!
//! Uses cents-based integer representation so price comparisons and range
//! bounds are exact, which matters for the inclusive price-range filter.
//! The storefront is single-currency (USD display).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A monetary amount in cents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
}

impl Money {
    /// Create a Money value from cents.
    pub const fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a Money value from a decimal dollar amount.
    ///
    /// ```
    /// use stride_commerce::Money;
    /// assert_eq!(Money::from_decimal(159.99).amount_cents, 15999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self::new((amount * 100.0).round() as i64)
    }

    /// Create a Money value from whole dollars.
    pub const fn from_dollars(dollars: i64) -> Self {
        Self::new(dollars * 100)
    }

    /// A zero amount.
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.amount_cents > 0
    }

    /// Convert to a decimal dollar value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    /// Subtract, stopping at zero.
    pub fn saturating_sub(&self, other: Money) -> Money {
        Money::new((self.amount_cents - other.amount_cents).max(0))
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("${:.2}", self.to_decimal())
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.amount_cents + other.amount_cents)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::new(self.amount_cents - other.amount_cents)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_decimal() {
        assert_eq!(Money::from_decimal(49.99).amount_cents, 4999);
        assert_eq!(Money::from_decimal(60.0).amount_cents, 6000);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::new(15999).display(), "$159.99");
        assert_eq!(Money::from_dollars(64).display(), "$64.00");
    }

    #[test]
    fn test_ordering_is_exact() {
        let low = Money::from_decimal(64.99);
        let high = Money::from_decimal(65.00);
        assert!(low < high);
        assert_eq!(low, Money::new(6499));
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::new(1000);
        let b = Money::new(300);
        assert_eq!((a + b).amount_cents, 1300);
        assert_eq!((a - b).amount_cents, 700);
    }

    #[test]
    fn test_saturating_sub() {
        let a = Money::new(300);
        let b = Money::new(1000);
        assert_eq!(a.saturating_sub(b), Money::zero());
        assert_eq!(b.saturating_sub(a).amount_cents, 700);
    }
}
