//! # Error Types
//!
//! Domain-specific error types for pizzeria-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pizzeria-core errors (this file)                                       │
//! │  └── CoreError        - Ordering workflow failures                      │
//! │                                                                         │
//! │  CLI errors (in app)                                                    │
//! │  ├── ConfigError      - Malformed environment overrides                 │
//! │  └── AppError         - Terminal I/O failures                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The stock ledger itself never errors; a refused decrement is a plain
//! `false`. `CoreError::Unavailable` is how the order builder reports that
//! refusal so the caller can re-prompt.

use thiserror::Error;
use uuid::Uuid;

// =============================================================================
// Core Error
// =============================================================================

/// Ordering workflow errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The item has no remaining stock, or is not tracked at all.
    ///
    /// ## User Workflow
    /// ```text
    /// Choose base "1" (Margherita)
    ///      │
    ///      ▼
    /// ledger.check_and_decrement("Margherita") → false
    ///      │
    ///      ▼
    /// Unavailable { item: "Margherita" }
    ///      │
    ///      ▼
    /// CLI shows: "Pizza unavailable or out of stock!" and asks again
    /// ```
    #[error("{item} is unavailable or out of stock")]
    Unavailable { item: String },

    /// A second payment was attempted for an order that is already settled.
    ///
    /// Unlike an unknown payment selection this is never defaulted away.
    #[error("Order {order_id} has already been paid")]
    OrderAlreadyPaid { order_id: Uuid },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::Unavailable {
            item: "Olives".to_string(),
        };
        assert_eq!(err.to_string(), "Olives is unavailable or out of stock");

        let order_id = Uuid::nil();
        let err = CoreError::OrderAlreadyPaid { order_id };
        assert_eq!(
            err.to_string(),
            "Order 00000000-0000-0000-0000-000000000000 has already been paid"
        );
    }
}
