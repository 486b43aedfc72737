//! # Pizzeria Entry Point
//!
//! The actual setup is in lib.rs for better testability.

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    pizzeria_cli::run().context("pizzeria session failed")
}
