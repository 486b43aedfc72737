//! # Configuration
//!
//! Display and fallback settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`PIZZERIA_*`)
//! 2. Defaults (this file)
//!
//! Stock and prices are deliberately not configurable: every run starts from
//! the fixed menu in `pizzeria-core`.
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use pizzeria_core::{Money, PaymentMethod};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Symbol printed in front of menu prices and totals.
    pub currency_symbol: String,

    /// Method used when the payment selection is not recognised.
    pub default_payment: PaymentMethod,
}

impl Default for AppConfig {
    /// `$` prices, PayPal fallback.
    fn default() -> Self {
        AppConfig {
            currency_symbol: "$".to_string(),
            default_payment: PaymentMethod::PayPal,
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// ## Environment Variables
    /// - `PIZZERIA_CURRENCY_SYMBOL`: override the currency symbol
    /// - `PIZZERIA_DEFAULT_PAYMENT`: `paypal` or `credit_card`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which returns the value of an
    /// environment-style key if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(symbol) = lookup("PIZZERIA_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(method) = lookup("PIZZERIA_DEFAULT_PAYMENT") {
            config.default_payment = method
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PIZZERIA_DEFAULT_PAYMENT".to_string()))?;
        }

        Ok(config)
    }

    /// Formats an amount for display, e.g. `$6.50`.
    pub fn format_currency(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.default_payment, PaymentMethod::PayPal);
    }

    #[test]
    fn test_environment_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("PIZZERIA_CURRENCY_SYMBOL", "€"),
            ("PIZZERIA_DEFAULT_PAYMENT", "credit_card"),
        ]))
        .unwrap();

        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.default_payment, PaymentMethod::CreditCard);
    }

    #[test]
    fn test_invalid_payment_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("PIZZERIA_DEFAULT_PAYMENT", "cash")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for PIZZERIA_DEFAULT_PAYMENT");
    }

    #[test]
    fn test_format_currency() {
        let config = AppConfig::default();
        assert_eq!(config.format_currency(Money::from_cents(650)), "$6.50");
        assert_eq!(config.format_currency(Money::from_cents(1)), "$0.01");
        assert_eq!(config.format_currency(Money::zero()), "$0.00");
    }
}
