//! # Stock Ledger
//!
//! Single source of truth for how many units of each item remain.
//!
//! ## Thread Safety
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  caller A ──┐                                                           │
//! │             ├──► Mutex<BTreeMap> ──► check > 0 ──► decrement ──► true   │
//! │  caller B ──┘         (one lock held for check AND decrement)           │
//! │                                                                         │
//! │  Two callers can never both take the last unit.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The ledger is constructed once, explicitly, and handed to whoever runs the
//! ordering flow. Share it across threads with `Arc<StockLedger>`.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::menu;

/// Owned copy of the ledger's counts, keyed by item name.
pub type InventorySnapshot = BTreeMap<String, u32>;

/// Per-item remaining unit counts.
///
/// Counts are unsigned and only ever move down by one under the lock, so they
/// can never go negative.
#[derive(Debug)]
pub struct StockLedger {
    counts: Mutex<BTreeMap<String, u32>>,
}

impl StockLedger {
    /// Creates a ledger tracking exactly the given items.
    pub fn new(initial: BTreeMap<String, u32>) -> Self {
        StockLedger {
            counts: Mutex::new(initial),
        }
    }

    /// Creates a ledger holding the fixed opening stock from the menu.
    pub fn with_initial_stock() -> Self {
        Self::new(menu::initial_stock())
    }

    /// Takes one unit of `item` if any remain.
    ///
    /// Returns `false` without touching the ledger when the item is out of
    /// stock or was never tracked. Unknown items are not inserted.
    ///
    /// ```rust
    /// use pizzeria_core::inventory::StockLedger;
    ///
    /// let ledger = StockLedger::with_initial_stock();
    /// assert!(ledger.check_and_decrement("Olives"));
    /// assert_eq!(ledger.remaining("Olives"), 9);
    /// assert!(!ledger.check_and_decrement("Anchovies"));
    /// ```
    pub fn check_and_decrement(&self, item: &str) -> bool {
        let mut counts = self.lock();
        match counts.get_mut(item) {
            Some(count) if *count > 0 => {
                *count -= 1;
                debug!(item, remaining = *count, "Stock decremented");
                true
            }
            Some(_) => {
                debug!(item, "Refused: out of stock");
                false
            }
            None => {
                debug!(item, "Refused: item not tracked");
                false
            }
        }
    }

    /// Returns the current count for one item (0 when untracked).
    pub fn remaining(&self, item: &str) -> u32 {
        self.lock().get(item).copied().unwrap_or(0)
    }

    /// Returns an owned copy of every count.
    ///
    /// Changing the returned map has no effect on the ledger.
    pub fn snapshot(&self) -> InventorySnapshot {
        self.lock().clone()
    }

    /// The map is consistent after every critical section, so a poisoned
    /// lock is safe to keep using.
    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, u32>> {
        self.counts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
