//! Error types for team operations.

use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Errors raised by the budget/cart engine and its callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeamError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Part '{part_id}' is not in the catalog")]
    UnknownPart { part_id: String },

    #[error("Team does not own part '{part_id}'")]
    UnknownOwnedItem { part_id: String },

    #[error("Cannot sell {requested} of '{part_id}': team owns {owned}")]
    InvalidSellQuantity {
        part_id: String,
        requested: u32,
        owned: u32,
    },

    #[error("Cart total exceeds budget by {overdraft} KB")]
    BudgetExceeded { overdraft: i64 },
}
