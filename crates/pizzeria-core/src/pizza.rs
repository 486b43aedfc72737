//! # Pizza Composition
//!
//! A pizza is either a bare base or a topping layered over another pizza.
//!
//! ```text
//! Topped { Olives }
//!   └── Topped { Cheese }
//!         └── Base(Margherita)
//!
//! description: "Margherita" → "Margherita, Cheese" → "Margherita, Cheese, Olives"
//! cost:         $5.00       →  $6.00               →  $6.50
//! ```
//!
//! Every layer owns its inner pizza outright. Adding a topping consumes the
//! current pizza and returns the new outer value. Nothing is cached: each
//! read walks the whole chain.

use serde::Serialize;

use crate::menu::{BaseKind, Topping};
use crate::money::Money;

/// A composed pizza.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Pizza {
    Base(BaseKind),
    Topped { inner: Box<Pizza>, topping: Topping },
}

impl Pizza {
    /// Starts a pizza from a bare base.
    pub fn base(kind: BaseKind) -> Self {
        Pizza::Base(kind)
    }

    /// Wraps this pizza in one more topping layer.
    ///
    /// ```rust
    /// use pizzeria_core::menu::{BaseKind, Topping};
    /// use pizzeria_core::pizza::Pizza;
    ///
    /// let pizza = Pizza::base(BaseKind::Margherita)
    ///     .with_topping(Topping::Cheese)
    ///     .with_topping(Topping::Olives);
    ///
    /// assert_eq!(pizza.description(), "Margherita, Cheese, Olives");
    /// assert_eq!(pizza.cost().amount_string(), "6.50");
    /// ```
    pub fn with_topping(self, topping: Topping) -> Self {
        Pizza::Topped {
            inner: Box::new(self),
            topping,
        }
    }

    /// Base name followed by each topping in the order it was added.
    pub fn description(&self) -> String {
        match self {
            Pizza::Base(kind) => kind.name().to_string(),
            Pizza::Topped { inner, topping } => {
                format!("{}, {}", inner.description(), topping.name())
            }
        }
    }

    /// Base price plus every topping increment.
    pub fn cost(&self) -> Money {
        match self {
            Pizza::Base(kind) => kind.price(),
            Pizza::Topped { inner, topping } => inner.cost() + topping.price(),
        }
    }

    /// Number of topping layers.
    pub fn depth(&self) -> usize {
        match self {
            Pizza::Base(_) => 0,
            Pizza::Topped { inner, .. } => inner.depth() + 1,
        }
    }

    /// The base at the root of the chain.
    pub fn base_kind(&self) -> BaseKind {
        let mut layer = self;
        loop {
            match layer {
                Pizza::Base(kind) => return *kind,
                Pizza::Topped { inner, .. } => layer = &**inner,
            }
        }
    }

    /// Toppings in the order they were applied (innermost first).
    pub fn toppings(&self) -> Vec<Topping> {
        let mut toppings = Vec::with_capacity(self.depth());
        let mut layer = self;
        while let Pizza::Topped { inner, topping } = layer {
            toppings.push(*topping);
            layer = &**inner;
        }
        toppings.reverse();
        toppings
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
