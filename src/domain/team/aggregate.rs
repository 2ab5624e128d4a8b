//! Team profile aggregate - the budget/cart engine.
//!
//! # Invariants
//!
//! - `spent` always equals the sum of `price * quantity` over the cart
//! - cart and owned items are id-unique; repeated acquisitions merge by id
//! - no line ever carries a zero or negative quantity
//!
//! Checkout's budget precondition (`budget - spent >= 0`) is caller
//! responsibility: the engine applies the mutation unconditionally and the
//! application-layer checkout handler is the gate.

use serde::{Deserialize, Serialize};

use super::cart::CartItem;
use super::errors::TeamError;
use crate::domain::foundation::{House, ValidationError};
use crate::domain::scoring::GameRules;

/// Maximum length for a team name.
pub const MAX_TEAM_NAME_LENGTH: usize = 100;

/// A team's mutable state for one run of the challenge.
///
/// Serialized field names match the stored document shape; records written
/// before the owned-items retrofit deserialize with an empty inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamProfile {
    grade: u8,
    house: House,
    team_name: String,
    budget: i64,
    spent: i64,
    cart: Vec<CartItem>,
    #[serde(default)]
    owned_items: Vec<CartItem>,
}

impl TeamProfile {
    /// Creates a fresh profile with the full starting budget.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the team name is blank
    /// - `OutOfRange` if the team name is too long
    pub fn new(grade: u8, house: House, team_name: &str, rules: &GameRules) -> Result<Self, ValidationError> {
        let team_name = team_name.trim();
        if team_name.is_empty() {
            return Err(ValidationError::empty_field("team_name"));
        }
        if team_name.len() > MAX_TEAM_NAME_LENGTH {
            return Err(ValidationError::out_of_range(
                "team_name",
                1,
                MAX_TEAM_NAME_LENGTH as i64,
                team_name.len() as i64,
            ));
        }
        Ok(Self {
            grade,
            house,
            team_name: team_name.to_string(),
            budget: rules.starting_budget,
            spent: 0,
            cart: Vec::new(),
            owned_items: Vec::new(),
        })
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    /// Grade level.
    pub fn grade(&self) -> u8 {
        self.grade
    }

    /// The team's house.
    pub fn house(&self) -> House {
        self.house
    }

    /// The team's name.
    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    /// Remaining spendable KB (excludes reserved cart value).
    pub fn budget(&self) -> i64 {
        self.budget
    }

    /// KB reserved by the current cart.
    pub fn spent(&self) -> i64 {
        self.spent
    }

    /// Current cart lines, in add order.
    pub fn cart(&self) -> &[CartItem] {
        &self.cart
    }

    /// Owned inventory lines, in acquisition order.
    pub fn owned_items(&self) -> &[CartItem] {
        &self.owned_items
    }

    /// KB left after the reserved cart value.
    pub fn remaining(&self) -> i64 {
        self.budget - self.spent
    }

    /// Whether the current cart fits the budget.
    pub fn can_checkout(&self) -> bool {
        self.remaining() >= 0
    }

    /// Total units in the cart.
    pub fn cart_count(&self) -> u32 {
        self.cart.iter().map(|i| i.quantity).sum()
    }

    /// Total units owned.
    pub fn owned_count(&self) -> u32 {
        self.owned_items.iter().map(|i| i.quantity).sum()
    }

    /// Owned units of one part.
    pub fn owned_quantity(&self, part_id: &str) -> u32 {
        self.owned_items
            .iter()
            .find(|i| i.id == part_id)
            .map(|i| i.quantity)
            .unwrap_or(0)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────

    /// Adds lines to the cart, merging with existing lines by part id.
    ///
    /// No budget check happens here: overspending is allowed transiently and
    /// only blocks at the checkout gate.
    pub fn add_to_cart(&mut self, items: Vec<CartItem>) {
        for incoming in items {
            if incoming.quantity == 0 {
                continue;
            }
            match self.cart.iter_mut().find(|line| line.id == incoming.id) {
                Some(line) => line.quantity += incoming.quantity,
                None => self.cart.push(incoming),
            }
        }
        self.recompute_spent();
    }

    /// Removes a line from the cart; no-op when the part isn't in it.
    pub fn remove_from_cart(&mut self, part_id: &str) {
        self.cart.retain(|line| line.id != part_id);
        self.recompute_spent();
    }

    /// Converts the cart into owned items and pays for it.
    ///
    /// Atomic over the profile: merges cart lines into the inventory by id,
    /// subtracts the cart total from the budget, clears the cart, and zeroes
    /// `spent` in one mutation. Checkout of an empty cart is a no-op.
    pub fn checkout(&mut self) {
        if self.cart.is_empty() {
            return;
        }
        let cart_total: i64 = self.cart.iter().map(CartItem::line_total).sum();
        for line in self.cart.drain(..) {
            match self.owned_items.iter_mut().find(|owned| owned.id == line.id) {
                Some(owned) => owned.quantity += line.quantity,
                None => self.owned_items.push(line),
            }
        }
        self.budget -= cart_total;
        self.spent = 0;
    }

    /// Sells owned units back at the configured rate and credits the budget.
    ///
    /// Returns the KB credited.
    ///
    /// # Errors
    ///
    /// - `UnknownOwnedItem` if the team owns none of the part
    /// - `InvalidSellQuantity` if `quantity` is 0 or exceeds the owned count
    pub fn sell_item(
        &mut self,
        part_id: &str,
        quantity: u32,
        rules: &GameRules,
    ) -> Result<i64, TeamError> {
        let owned = self
            .owned_items
            .iter_mut()
            .find(|line| line.id == part_id)
            .ok_or_else(|| TeamError::UnknownOwnedItem {
                part_id: part_id.to_string(),
            })?;

        if quantity == 0 || quantity > owned.quantity {
            return Err(TeamError::InvalidSellQuantity {
                part_id: part_id.to_string(),
                requested: quantity,
                owned: owned.quantity,
            });
        }

        let sale_value = rules.sale_value(owned.price, quantity);
        owned.quantity -= quantity;
        self.owned_items.retain(|line| line.quantity > 0);
        self.budget += sale_value;
        Ok(sale_value)
    }

    fn recompute_spent(&mut self) {
        self.spent = self.cart.iter().map(CartItem::line_total).sum();
    }
}
