//! # Ordering Session
//!
//! The interactive loop: base menu, topping menu, order summary, payment.
//!
//! ## Flow
//! ```text
//! ┌──────────────┐  0 / EOF   ┌──────┐
//! │  base menu   │──────────► │ exit │
//! └──────┬───────┘            └──────┘
//!        │ in stock (otherwise: "Pizza unavailable..." and ask again)
//!        ▼
//! ┌──────────────┐  topping in stock → add layer, ask again
//! │ topping menu │  unavailable/invalid → "Topping unavailable...", ask again
//! └──────┬───────┘
//!        │ 4 / EOF
//!        ▼
//!   summary + inventory
//!        │
//!        ▼
//! ┌──────────────┐  unknown / EOF → configured default method
//! │ payment menu │
//! └──────┬───────┘
//!        └──────────► back to base menu
//! ```
//!
//! The session is generic over its streams so tests can script a whole run.

use std::io::{BufRead, Write};

use pizzeria_core::{
    BaseChoice, BaseKind, Order, OrderBuilder, PaymentMethod, StockLedger, Topping,
    ToppingChoice,
};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::AppResult;

/// Whether the base prompt asked to keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Session<'a, R, W> {
    input: R,
    output: W,
    ledger: &'a StockLedger,
    config: &'a AppConfig,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(input: R, output: W, ledger: &'a StockLedger, config: &'a AppConfig) -> Self {
        Session {
            input,
            output,
            ledger,
            config,
        }
    }

    /// Takes orders until the user exits or input ends.
    pub fn run(&mut self) -> AppResult<()> {
        writeln!(self.output, "Welcome to the Pizza Restaurant!")?;

        let mut completed = 0usize;
        while self.take_order()? == Flow::Continue {
            completed += 1;
        }

        info!(completed, "Session ended");
        Ok(())
    }

    fn take_order(&mut self) -> AppResult<Flow> {
        let builder = match self.choose_base()? {
            Some(builder) => builder,
            None => return Ok(Flow::Exit),
        };
        let order = self.choose_toppings(builder)?;
        self.show_summary(&order)?;
        self.settle(order)?;
        Ok(Flow::Continue)
    }

    /// Loops until a base is successfully taken from stock, or the user exits.
    fn choose_base(&mut self) -> AppResult<Option<OrderBuilder<'a>>> {
        let ledger = self.ledger;
        loop {
            writeln!(self.output, "\nChoose your base pizza:")?;
            for (code, base) in (1..).zip(BaseKind::ALL) {
                writeln!(
                    self.output,
                    "{}. {} ({})",
                    code,
                    base.name(),
                    self.config.format_currency(base.price())
                )?;
            }
            writeln!(self.output, "0 => to exit")?;

            let Some(line) = self.prompt()? else {
                return Ok(None);
            };

            match BaseChoice::parse(&line) {
                BaseChoice::Exit => return Ok(None),
                BaseChoice::Pizza(kind) => match OrderBuilder::start(ledger, kind) {
                    Ok(builder) => return Ok(Some(builder)),
                    Err(err) => debug!(error = %err, "Base refused"),
                },
                BaseChoice::Invalid => debug!(input = line.trim(), "Unrecognised base choice"),
            }
            writeln!(self.output, "Pizza unavailable or out of stock!")?;
        }
    }

    fn choose_toppings(&mut self, mut builder: OrderBuilder<'a>) -> AppResult<Order> {
        loop {
            writeln!(self.output, "\nAvailable toppings:")?;
            for (code, topping) in (1..).zip(Topping::ALL) {
                writeln!(
                    self.output,
                    "{}. {} ({})",
                    code,
                    topping.name(),
                    self.config.format_currency(topping.price())
                )?;
            }
            writeln!(self.output, "{}. Finish order", Topping::ALL.len() + 1)?;

            let Some(line) = self.prompt()? else {
                return Ok(builder.finish());
            };

            match ToppingChoice::parse(&line) {
                ToppingChoice::Finish => return Ok(builder.finish()),
                ToppingChoice::Add(topping) => match builder.add_topping(topping) {
                    Ok(()) => continue,
                    Err(err) => debug!(error = %err, "Topping refused"),
                },
                ToppingChoice::Invalid => {
                    debug!(input = line.trim(), "Unrecognised topping choice")
                }
            }
            writeln!(self.output, "Topping unavailable or out of stock!")?;
        }
    }

    fn show_summary(&mut self, order: &Order) -> AppResult<()> {
        writeln!(self.output, "\nYour order:")?;
        writeln!(self.output, "Description: {}", order.description())?;
        writeln!(
            self.output,
            "Total cost: {}",
            self.config.format_currency(order.total())
        )?;

        let snapshot = serde_json::to_string(&self.ledger.snapshot())?;
        writeln!(self.output, "\nRemaining Inventory:")?;
        writeln!(self.output, "{}", snapshot)?;
        Ok(())
    }

    fn settle(&mut self, mut order: Order) -> AppResult<()> {
        writeln!(self.output, "\nChoose Payment Method:")?;
        for (code, method) in (1..).zip(PaymentMethod::ALL) {
            writeln!(self.output, "{}. {}", code, method)?;
        }

        let fallback = self.config.default_payment;
        let method = match self.prompt()? {
            Some(line) => match PaymentMethod::from_menu_code(&line) {
                Some(method) => method,
                None => {
                    writeln!(
                        self.output,
                        "Invalid payment method. Defaulting to {}.",
                        fallback
                    )?;
                    fallback
                }
            },
            None => {
                writeln!(
                    self.output,
                    "\nNo payment method chosen. Defaulting to {}.",
                    fallback
                )?;
                fallback
            }
        };

        let confirmation = order.pay(method)?;
        writeln!(self.output, "{}", confirmation)?;
        writeln!(self.output, "Order successful! Enjoy your pizza!")?;
        Ok(())
    }

    /// Prints the shared prompt and reads one line. `None` means end of input.
    fn prompt(&mut self) -> AppResult<Option<String>> {
        write!(self.output, "Enter the number of your choice: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
