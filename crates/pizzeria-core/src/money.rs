//! # Money Module
//!
//! Provides the `Money` type for handling menu prices and order totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With f64 toppings:                                                     │
//! │    5.0 + 0.7 + 0.7 + 0.7 = 7.1000000000000005  ❌                       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    500 + 70 + 70 + 70 = 710 cents = $7.10  ✅                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pizzeria_core::money::Money;
//!
//! let base = Money::from_cents(500);          // $5.00
//! let total = base + Money::from_cents(50);   // $5.50
//! assert_eq!(total.to_string(), "$5.50");
//! assert_eq!(total.amount_string(), "5.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// BaseKind::price ──┐
///                   ├──► Pizza::cost (walks every layer) ──► PaymentMethod::pay
/// Topping::price ───┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use pizzeria_core::money::Money;
    ///
    /// let price = Money::from_cents(650); // $6.50
    /// assert_eq!(price.cents(), 650);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Formats the amount with exactly two decimals and no currency symbol.
    ///
    /// This is the form used on payment confirmations (`Paid 6.50 using PayPal`).
    ///
    /// ```rust
    /// use pizzeria_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(650).amount_string(), "6.50");
    /// assert_eq!(Money::from_cents(-5).amount_string(), "-0.05");
    /// ```
    pub fn amount_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }

    /// Formats the amount with the given currency symbol in front.
    ///
    /// ```rust
    /// use pizzeria_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1234).format_with_symbol("€"), "€12.34");
    /// assert_eq!(Money::from_cents(-1234).format_with_symbol("$"), "-$12.34");
    /// ```
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Dollar display, e.g. `$6.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(650)), "$6.50");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_amount_string_has_two_decimals() {
        assert_eq!(Money::from_cents(650).amount_string(), "6.50");
        assert_eq!(Money::from_cents(7).amount_string(), "0.07");
        assert_eq!(Money::zero().amount_string(), "0.00");
    }

    /// Repeated small increments must not drift the way f64 does.
    #[test]
    fn test_repeated_fractional_increments_are_exact() {
        let mushrooms = Money::from_cents(70);
        let mut total = Money::from_cents(500);
        for _ in 0..3 {
            total += mushrooms;
        }
        assert_eq!(total.cents(), 710);
        assert_eq!(total.amount_string(), "7.10");
    }

    #[test]
    fn test_sum() {
        let parts = [50, 70, 100].map(Money::from_cents);
        let total: Money = parts.into_iter().sum();
        assert_eq!(total, Money::from_cents(220));

        let empty: Money = std::iter::empty().sum();
        assert_eq!(empty, Money::zero());
    }
}
