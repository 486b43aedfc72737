//! # pizzeria-core: Pure Ordering Logic
//!
//! Everything the pizzeria simulator decides lives here; the CLI only reads
//! input and prints results.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pizzeria Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/cli (Session loop)                      │   │
//! │  │    base menu ──► topping menu ──► summary ──► payment menu      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ direct calls                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pizzeria-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ inventory │  │   pizza   │  │  payment  │  │   order   │  │   │
//! │  │   │ StockLedg │  │ Base/Top  │  │ PayPal/CC │  │ Builder   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`menu`] - Bases, toppings, prices, opening stock, menu codes
//! - [`money`] - Integer-cent money
//! - [`inventory`] - `StockLedger` with atomic check-and-decrement
//! - [`pizza`] - Layered pizza composition
//! - [`payment`] - Payment methods and confirmations
//! - [`order`] - Ledger-gated order assembly and idempotent payment
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use pizzeria_core::{BaseKind, OrderBuilder, PaymentMethod, StockLedger, Topping};
//!
//! let ledger = StockLedger::with_initial_stock();
//!
//! let mut builder = OrderBuilder::start(&ledger, BaseKind::Margherita)?;
//! builder.add_topping(Topping::Cheese)?;
//! builder.add_topping(Topping::Olives)?;
//! let mut order = builder.finish();
//!
//! assert_eq!(order.description(), "Margherita, Cheese, Olives");
//! let confirmation = order.pay(PaymentMethod::PayPal)?;
//! assert_eq!(confirmation.to_string(), "Paid 6.50 using PayPal");
//! # Ok::<(), pizzeria_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod inventory;
pub mod menu;
pub mod money;
pub mod order;
pub mod payment;
pub mod pizza;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult};
pub use inventory::{InventorySnapshot, StockLedger};
pub use menu::{BaseChoice, BaseKind, Topping, ToppingChoice};
pub use money::Money;
pub use order::{Order, OrderBuilder, OrderStatus};
pub use payment::{PaymentConfirmation, PaymentMethod};
pub use pizza::Pizza;
