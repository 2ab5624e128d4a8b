//! Tunable game rules applied by the budget and scoring engines.
//!
//! The sell-back rate and the bonus cap have both changed between runs of
//! the activity. They live here so every call site applies the same values;
//! the defaults are the ones the last run used.

use serde::{Deserialize, Serialize};

/// Points granted per full bonus step of unspent budget.
const BONUS_POINTS_PER_STEP: i64 = 5;

/// King Bucks per bonus step.
const BONUS_STEP_KB: i64 = 10;

/// The game's tunable constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    /// King Bucks every team starts with.
    pub starting_budget: i64,
    /// Percentage of the purchase price refunded when selling a part back.
    pub sell_rate_percent: u32,
    /// Cap on the budget counted toward the KB bonus; `None` is uncapped.
    pub bonus_cap: Option<i64>,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            starting_budget: 120,
            sell_rate_percent: 50,
            bonus_cap: None,
        }
    }
}

impl GameRules {
    /// Bonus points for unspent budget: 10 KB = 5 points.
    ///
    /// Every surface that shows or stores a total (leaderboard, save, CSV
    /// export, sort order) must come through here.
    pub fn kb_bonus(&self, remaining: i64) -> i64 {
        if remaining <= 0 {
            return 0;
        }
        let counted = match self.bonus_cap {
            Some(cap) => remaining.min(cap),
            None => remaining,
        };
        counted / BONUS_STEP_KB * BONUS_POINTS_PER_STEP
    }

    /// KB refunded for selling `quantity` units bought at `price` each.
    ///
    /// Floor of the whole sale, not per unit.
    pub fn sale_value(&self, price: i64, quantity: u32) -> i64 {
        price * i64::from(quantity) * i64::from(self.sell_rate_percent) / 100
    }
}
