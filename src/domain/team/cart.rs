//! Cart line items.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Part, PartCategory};

/// One line in a cart or inventory: a part reference with a price snapshot
/// taken at add-time and a positive quantity.
///
/// A line whose quantity reaches 0 is removed, never kept as a zero record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Catalog part id.
    pub id: String,
    /// Display name, snapshotted from the catalog.
    pub name: String,
    /// Price in KB, snapshotted from the catalog at add-time.
    pub price: i64,
    /// Units of this part.
    pub quantity: u32,
    /// Shop category.
    pub category: PartCategory,
}

impl CartItem {
    /// Builds a line for `quantity` units of a catalog part.
    pub fn from_part(part: &Part, quantity: u32) -> Self {
        Self {
            id: part.id.to_string(),
            name: part.name.to_string(),
            price: part.price,
            quantity,
            category: part.category,
        }
    }

    /// KB value of this line.
    pub fn line_total(&self) -> i64 {
        self.price * i64::from(self.quantity)
    }
}
