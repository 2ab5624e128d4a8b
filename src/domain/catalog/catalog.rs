//! The static parts catalog.

use once_cell::sync::Lazy;

use super::part::{Part, PartCategory};

/// Every purchasable part, grouped by category in shop display order.
pub static PARTS_CATALOG: Lazy<Vec<Part>> = Lazy::new(|| {
    vec![
        Part {
            id: "large_hub",
            name: "Large Hub",
            price: 40,
            category: PartCategory::Hubs,
        },
        Part {
            id: "small_hub",
            name: "Small Hub",
            price: 30,
            category: PartCategory::Hubs,
        },
        Part {
            id: "small_motor",
            name: "Small Motor",
            price: 10,
            category: PartCategory::Motors,
        },
        Part {
            id: "medium_motor",
            name: "Medium Motor",
            price: 18,
            category: PartCategory::Motors,
        },
        Part {
            id: "large_motor",
            name: "Large Motor",
            price: 25,
            category: PartCategory::Motors,
        },
        Part {
            id: "small_tires",
            name: "Small Tires (pair)",
            price: 6,
            category: PartCategory::Tires,
        },
        Part {
            id: "medium_tires",
            name: "Medium Tires (pair)",
            price: 10,
            category: PartCategory::Tires,
        },
        Part {
            id: "small_claw",
            name: "Small Claw",
            price: 12,
            category: PartCategory::Claws,
        },
        Part {
            id: "large_claw",
            name: "Large Claw",
            price: 18,
            category: PartCategory::Claws,
        },
    ]
});

/// Looks up a part by its catalog id.
pub fn find_part(id: &str) -> Option<&'static Part> {
    PARTS_CATALOG.iter().find(|p| p.id == id)
}

/// Returns the parts in a category, in catalog order.
pub fn parts_in_category(category: PartCategory) -> Vec<&'static Part> {
    PARTS_CATALOG
        .iter()
        .filter(|p| p.category == category)
        .collect()
}
