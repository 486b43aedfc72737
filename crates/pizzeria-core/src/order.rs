//! # Order Workflow
//!
//! Ties the stock ledger to pizza composition so the two can never disagree.
//!
//! ## Flow
//! ```text
//! OrderBuilder::start(&ledger, base)     ledger: base -1   pizza: Base
//!      │
//!      ▼
//! add_topping(t)  (zero or more)          ledger: t -1      pizza: Topped{t}
//!      │
//!      ▼
//! finish()  ──► Order { status: Draft }
//!      │
//!      ▼
//! pay(method) ──► PaymentConfirmation      status: Paid
//! ```
//!
//! A layer is only added after its unit was taken from the ledger, so every
//! pizza's layers mirror exactly the successful decrements for that order.

use std::mem;

use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::inventory::StockLedger;
use crate::menu::{BaseKind, Topping};
use crate::money::Money;
use crate::payment::{PaymentConfirmation, PaymentMethod};
use crate::pizza::Pizza;

// =============================================================================
// Order Builder
// =============================================================================

/// An order being assembled against a ledger.
#[derive(Debug)]
pub struct OrderBuilder<'a> {
    ledger: &'a StockLedger,
    pizza: Pizza,
}

impl<'a> OrderBuilder<'a> {
    /// Takes one base from the ledger and starts the pizza.
    ///
    /// ## Errors
    /// `CoreError::Unavailable` when the base is out of stock. No count is
    /// changed in that case.
    pub fn start(ledger: &'a StockLedger, base: BaseKind) -> CoreResult<Self> {
        take(ledger, base.name())?;
        debug!(base = base.name(), "Order started");
        Ok(OrderBuilder {
            ledger,
            pizza: Pizza::base(base),
        })
    }

    /// Takes one unit of `topping` from the ledger and layers it on.
    ///
    /// ## Errors
    /// `CoreError::Unavailable` when the topping is out of stock. The pizza
    /// is left as it was.
    pub fn add_topping(&mut self, topping: Topping) -> CoreResult<()> {
        take(self.ledger, topping.name())?;
        let placeholder = Pizza::base(self.pizza.base_kind());
        let inner = mem::replace(&mut self.pizza, placeholder);
        self.pizza = inner.with_topping(topping);
        debug!(topping = topping.name(), depth = self.pizza.depth(), "Topping added");
        Ok(())
    }

    /// The pizza as composed so far.
    pub fn pizza(&self) -> &Pizza {
        &self.pizza
    }

    /// Closes the order for payment.
    pub fn finish(self) -> Order {
        let order = Order {
            id: Uuid::new_v4(),
            pizza: self.pizza,
            status: OrderStatus::Draft,
            confirmation: None,
        };
        info!(
            order_id = %order.id,
            description = %order.description(),
            total = %order.total(),
            "Order ready for payment"
        );
        order
    }
}

fn take(ledger: &StockLedger, item: &str) -> CoreResult<()> {
    if ledger.check_and_decrement(item) {
        Ok(())
    } else {
        Err(CoreError::Unavailable {
            item: item.to_string(),
        })
    }
}

// =============================================================================
// Order
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Composed, waiting for payment.
    Draft,
    /// Settled; further payments are refused.
    Paid,
}

/// A finished pizza awaiting (or past) payment.
#[derive(Debug, Serialize)]
pub struct Order {
    id: Uuid,
    pizza: Pizza,
    status: OrderStatus,
    confirmation: Option<PaymentConfirmation>,
}

impl Order {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn pizza(&self) -> &Pizza {
        &self.pizza
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn description(&self) -> String {
        self.pizza.description()
    }

    pub fn total(&self) -> Money {
        self.pizza.cost()
    }

    /// The confirmation recorded by the successful payment, if any.
    pub fn confirmation(&self) -> Option<&PaymentConfirmation> {
        self.confirmation.as_ref()
    }

    /// Pays the order total with `method`.
    ///
    /// ## Errors
    /// `CoreError::OrderAlreadyPaid` if this order was already settled; the
    /// original confirmation stays in place.
    pub fn pay(&mut self, method: PaymentMethod) -> CoreResult<PaymentConfirmation> {
        if self.status == OrderStatus::Paid {
            return Err(CoreError::OrderAlreadyPaid { order_id: self.id });
        }

        let confirmation = method.settle(Some(self.id), self.total());
        self.status = OrderStatus::Paid;
        self.confirmation = Some(confirmation.clone());
        info!(order_id = %self.id, method = %method, "Order paid");
        Ok(confirmation)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_margherita_cheese_olives_paypal() {
        let ledger = StockLedger::with_initial_stock();

        let mut builder = OrderBuilder::start(&ledger, BaseKind::Margherita).unwrap();
        builder.add_topping(Topping::Cheese).unwrap();
        builder.add_topping(Topping::Olives).unwrap();
        let mut order = builder.finish();

        assert_eq!(order.description(), "Margherita, Cheese, Olives");
        assert_eq!(order.total().amount_string(), "6.50");
        assert_eq!(ledger.remaining("Margherita"), 9);
        assert_eq!(ledger.remaining("Cheese"), 14);
        assert_eq!(ledger.remaining("Olives"), 9);

        let confirmation = order.pay(PaymentMethod::PayPal).unwrap();
        assert_eq!(confirmation.to_string(), "Paid 6.50 using PayPal");
        assert_eq!(confirmation.order_id, Some(order.id()));
        assert_eq!(order.status(), OrderStatus::Paid);
    }

    #[test]
    fn test_out_of_stock_base_changes_nothing() {
        let mut stock = crate::menu::initial_stock();
        stock.insert("Pepperoni".to_string(), 0);
        let ledger = StockLedger::new(stock);
        let before = ledger.snapshot();

        let err = OrderBuilder::start(&ledger, BaseKind::Pepperoni).unwrap_err();

        assert_eq!(
            err,
            CoreError::Unavailable {
                item: "Pepperoni".to_string()
            }
        );
        assert_eq!(ledger.snapshot(), before);
    }

    #[test]
    fn test_out_of_stock_topping_leaves_pizza_unchanged() {
        let ledger = StockLedger::new(BTreeMap::from([
            ("Margherita".to_string(), 1),
            ("Olives".to_string(), 1),
        ]));

        let mut builder = OrderBuilder::start(&ledger, BaseKind::Margherita).unwrap();
        builder.add_topping(Topping::Olives).unwrap();
        assert!(builder.add_topping(Topping::Olives).is_err());
        assert!(builder.add_topping(Topping::Cheese).is_err());

        assert_eq!(builder.pizza().description(), "Margherita, Olives");
        assert_eq!(builder.pizza().depth(), 1);
        assert_eq!(ledger.remaining("Olives"), 0);
    }

    #[test]
    fn test_layers_match_successful_decrements() {
        let ledger = StockLedger::with_initial_stock();
        let mut builder = OrderBuilder::start(&ledger, BaseKind::Pepperoni).unwrap();
        for topping in [Topping::Mushrooms, Topping::Mushrooms, Topping::Cheese] {
            builder.add_topping(topping).unwrap();
        }
        let order = builder.finish();

        let taken_mushrooms = 12 - ledger.remaining("Mushrooms");
        let layered_mushrooms = order
            .pizza()
            .toppings()
            .iter()
            .filter(|t| **t == Topping::Mushrooms)
            .count() as u32;
        assert_eq!(taken_mushrooms, layered_mushrooms);
        assert_eq!(order.pizza().depth(), 3);
        assert_eq!(order.total().amount_string(), "8.40");
    }

    #[test]
    fn test_paying_twice_is_refused() {
        let ledger = StockLedger::with_initial_stock();
        let mut order = OrderBuilder::start(&ledger, BaseKind::Margherita)
            .unwrap()
            .finish();

        let first = order.pay(PaymentMethod::CreditCard).unwrap();
        let second = order.pay(PaymentMethod::PayPal);

        assert_eq!(
            second,
            Err(CoreError::OrderAlreadyPaid {
                order_id: order.id()
            })
        );
        assert_eq!(first.order_id, Some(order.id()));
        assert_eq!(order.confirmation(), Some(&first));
    }

    #[test]
    fn test_new_orders_start_as_draft_with_unique_ids() {
        let ledger = StockLedger::with_initial_stock();
        let a = OrderBuilder::start(&ledger, BaseKind::Margherita)
            .unwrap()
            .finish();
        let b = OrderBuilder::start(&ledger, BaseKind::Margherita)
            .unwrap()
            .finish();

        assert_eq!(a.status(), OrderStatus::Draft);
        assert!(a.confirmation().is_none());
        assert_ne!(a.id(), b.id());
    }
}
