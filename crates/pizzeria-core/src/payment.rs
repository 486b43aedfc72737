//! # Payment
//!
//! The fixed set of ways an order can be settled. Paying is simulated: it
//! never talks to a gateway and always succeeds, producing a confirmation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Payment Method
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    PayPal,
    CreditCard,
}

impl PaymentMethod {
    /// Every method, in menu order.
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::PayPal, PaymentMethod::CreditCard];

    pub const fn label(&self) -> &'static str {
        match self {
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::CreditCard => "Credit Card",
        }
    }

    /// Maps a payment menu code to a method.
    ///
    /// Returns `None` for anything else; the caller falls back to its
    /// configured default instead of treating that as an error.
    pub fn from_menu_code(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(PaymentMethod::PayPal),
            "2" => Some(PaymentMethod::CreditCard),
            _ => None,
        }
    }

    /// Settles `amount` with this method.
    ///
    /// ```rust
    /// use pizzeria_core::money::Money;
    /// use pizzeria_core::payment::PaymentMethod;
    ///
    /// let confirmation = PaymentMethod::PayPal.pay(Money::from_cents(650));
    /// assert_eq!(confirmation.to_string(), "Paid 6.50 using PayPal");
    /// ```
    pub fn pay(&self, amount: Money) -> PaymentConfirmation {
        self.settle(None, amount)
    }

    /// Settles `amount` on behalf of a specific order.
    pub(crate) fn settle(&self, order_id: Option<Uuid>, amount: Money) -> PaymentConfirmation {
        info!(method = self.label(), amount = %amount, ?order_id, "Payment settled");
        PaymentConfirmation {
            order_id,
            method: *self,
            amount,
            paid_at: Utc::now(),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a configured payment method name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown payment method '{0}' (expected paypal or credit_card)")]
pub struct UnknownPaymentMethod(pub String);

/// Parses configuration keys: `paypal`, `credit_card` (case-insensitive,
/// `-` accepted in place of `_`).
impl FromStr for PaymentMethod {
    type Err = UnknownPaymentMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "paypal" => Ok(PaymentMethod::PayPal),
            "credit_card" | "creditcard" => Ok(PaymentMethod::CreditCard),
            _ => Err(UnknownPaymentMethod(s.to_string())),
        }
    }
}

// =============================================================================
// Confirmation
// =============================================================================

/// Record of a settled amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    /// The order this payment settled; `None` for a standalone `pay`.
    pub order_id: Option<Uuid>,
    pub method: PaymentMethod,
    pub amount: Money,
    pub paid_at: DateTime<Utc>,
}

/// `Paid 6.50 using PayPal`
impl fmt::Display for PaymentConfirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Paid {} using {}",
            self.amount.amount_string(),
            self.method
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
