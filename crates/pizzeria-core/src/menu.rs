//! # Menu
//!
//! The fixed catalogue: base pizzas, toppings, their prices, the stock every
//! session starts with, and how numbered menu input maps onto them.
//!
//! ## Catalogue
//! ```text
//! ┌──────────────────────────────┐   ┌──────────────────────────────┐
//! │  BaseKind       price  code  │   │  Topping        +price  code │
//! │  ──────────     ─────  ────  │   │  ──────────     ──────  ──── │
//! │  Margherita     $5.00   1    │   │  Cheese         $1.00    1   │
//! │  Pepperoni      $6.00   2    │   │  Olives         $0.50    2   │
//! │  (exit)                 0    │   │  Mushrooms      $0.70    3   │
//! └──────────────────────────────┘   │  (finish)                4   │
//!                                    └──────────────────────────────┘
//! ```
//!
//! Bases and toppings share one stock namespace keyed by display name.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::money::Money;

// =============================================================================
// Base Pizzas
// =============================================================================

/// A base pizza that every order starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseKind {
    Margherita,
    Pepperoni,
}

impl BaseKind {
    /// Every base, in menu order.
    pub const ALL: [BaseKind; 2] = [BaseKind::Margherita, BaseKind::Pepperoni];

    /// Display name; also the stock ledger key.
    pub const fn name(&self) -> &'static str {
        match self {
            BaseKind::Margherita => "Margherita",
            BaseKind::Pepperoni => "Pepperoni",
        }
    }

    pub const fn price(&self) -> Money {
        match self {
            BaseKind::Margherita => Money::from_cents(500),
            BaseKind::Pepperoni => Money::from_cents(600),
        }
    }
}

// =============================================================================
// Toppings
// =============================================================================

/// An add-on layered over a pizza.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topping {
    Cheese,
    Olives,
    Mushrooms,
}

impl Topping {
    /// Every topping, in menu order.
    pub const ALL: [Topping; 3] = [Topping::Cheese, Topping::Olives, Topping::Mushrooms];

    /// Display name; also the stock ledger key.
    pub const fn name(&self) -> &'static str {
        match self {
            Topping::Cheese => "Cheese",
            Topping::Olives => "Olives",
            Topping::Mushrooms => "Mushrooms",
        }
    }

    /// Flat increment added to the wrapped pizza's price.
    pub const fn price(&self) -> Money {
        match self {
            Topping::Cheese => Money::from_cents(100),
            Topping::Olives => Money::from_cents(50),
            Topping::Mushrooms => Money::from_cents(70),
        }
    }
}

// =============================================================================
// Initial Stock
// =============================================================================

/// Stock every session starts with. Nothing persists between runs.
pub const INITIAL_STOCK: [(&str, u32); 5] = [
    ("Margherita", 10),
    ("Pepperoni", 10),
    ("Cheese", 15),
    ("Olives", 10),
    ("Mushrooms", 12),
];

/// Returns [`INITIAL_STOCK`] as an owned map, ready for `StockLedger::new`.
pub fn initial_stock() -> BTreeMap<String, u32> {
    INITIAL_STOCK
        .iter()
        .map(|(name, count)| (name.to_string(), *count))
        .collect()
}

// =============================================================================
// Menu Input
// =============================================================================

/// What the user typed at the base-pizza prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseChoice {
    Pizza(BaseKind),
    Exit,
    /// Anything outside the menu. Handled like an out-of-stock pick.
    Invalid,
}

impl BaseChoice {
    /// Parses a menu code; surrounding whitespace is ignored.
    ///
    /// ```rust
    /// use pizzeria_core::menu::{BaseChoice, BaseKind};
    ///
    /// assert_eq!(BaseChoice::parse(" 1\n"), BaseChoice::Pizza(BaseKind::Margherita));
    /// assert_eq!(BaseChoice::parse("0"), BaseChoice::Exit);
    /// assert_eq!(BaseChoice::parse("pizza"), BaseChoice::Invalid);
    /// ```
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "0" => BaseChoice::Exit,
            "1" => BaseChoice::Pizza(BaseKind::Margherita),
            "2" => BaseChoice::Pizza(BaseKind::Pepperoni),
            _ => BaseChoice::Invalid,
        }
    }
}

/// What the user typed at the topping prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToppingChoice {
    Add(Topping),
    Finish,
    /// Anything outside the menu. Handled like an out-of-stock pick.
    Invalid,
}

impl ToppingChoice {
    /// Parses a menu code; surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => ToppingChoice::Add(Topping::Cheese),
            "2" => ToppingChoice::Add(Topping::Olives),
            "3" => ToppingChoice::Add(Topping::Mushrooms),
            "4" => ToppingChoice::Finish,
            _ => ToppingChoice::Invalid,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prices() {
        assert_eq!(BaseKind::Margherita.price().cents(), 500);
        assert_eq!(BaseKind::Pepperoni.price().cents(), 600);
        assert_eq!(Topping::Cheese.price().cents(), 100);
        assert_eq!(Topping::Olives.price().cents(), 50);
        assert_eq!(Topping::Mushrooms.price().cents(), 70);
    }

    #[test]
    fn test_initial_stock_covers_every_menu_item() {
        let stock = initial_stock();
        assert_eq!(stock.len(), 5);
        for base in BaseKind::ALL {
            assert!(stock.contains_key(base.name()));
        }
        for topping in Topping::ALL {
            assert!(stock.contains_key(topping.name()));
        }
        assert_eq!(stock["Cheese"], 15);
        assert_eq!(stock["Mushrooms"], 12);
    }

    #[test]
    fn test_base_choice_parse() {
        assert_eq!(BaseChoice::parse("2"), BaseChoice::Pizza(BaseKind::Pepperoni));
        assert_eq!(BaseChoice::parse("  0 "), BaseChoice::Exit);
        assert_eq!(BaseChoice::parse("3"), BaseChoice::Invalid);
        assert_eq!(BaseChoice::parse(""), BaseChoice::Invalid);
    }

    #[test]
    fn test_topping_choice_parse() {
        assert_eq!(ToppingChoice::parse("1"), ToppingChoice::Add(Topping::Cheese));
        assert_eq!(ToppingChoice::parse("2"), ToppingChoice::Add(Topping::Olives));
        assert_eq!(ToppingChoice::parse("3\n"), ToppingChoice::Add(Topping::Mushrooms));
        assert_eq!(ToppingChoice::parse("4"), ToppingChoice::Finish);
        assert_eq!(ToppingChoice::parse("0"), ToppingChoice::Invalid);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&BaseKind::Margherita).unwrap();
        assert_eq!(json, "\"margherita\"");
        let back: Topping = serde_json::from_str("\"mushrooms\"").unwrap();
        assert_eq!(back, Topping::Mushrooms);
    }
}
