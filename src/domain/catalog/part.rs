//! Catalog part value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category a catalog part belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartCategory {
    Hubs,
    Motors,
    Tires,
    Claws,
}

impl PartCategory {
    /// All categories, in shop display order.
    pub const ALL: [PartCategory; 4] = [
        PartCategory::Hubs,
        PartCategory::Motors,
        PartCategory::Tires,
        PartCategory::Claws,
    ];

    /// Returns the display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PartCategory::Hubs => "Hubs",
            PartCategory::Motors => "Motors",
            PartCategory::Tires => "Tires",
            PartCategory::Claws => "Claws",
        }
    }
}

impl fmt::Display for PartCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A purchasable part. Catalog entries are immutable; prices are in KB.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Part {
    /// Stable catalog key, e.g. `small_motor`.
    pub id: &'static str,
    /// Display name, e.g. `Small Motor`.
    pub name: &'static str,
    /// Price in King Bucks.
    pub price: i64,
    /// Shop category.
    pub category: PartCategory,
}
