//! Game rule configuration (budget, sell-back rate, bonus cap)

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::scoring::GameRules;

/// Tunable game rules.
///
/// Defaults match the classroom challenge as run: 120 KB starting budget,
/// parts sell back at half price, and the King Bucks bonus is uncapped.
#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    /// King Bucks every team starts with
    #[serde(default = "default_starting_budget")]
    pub starting_budget: i64,

    /// Percentage of the purchase price refunded when selling a part
    #[serde(default = "default_sell_rate")]
    pub sell_rate_percent: u32,

    /// Optional cap on the budget counted toward the KB bonus
    pub bonus_cap: Option<i64>,
}

impl GameConfig {
    /// Builds the domain rules value handed to the engines.
    pub fn rules(&self) -> GameRules {
        GameRules {
            starting_budget: self.starting_budget,
            sell_rate_percent: self.sell_rate_percent,
            bonus_cap: self.bonus_cap,
        }
    }

    /// Validate game configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.starting_budget <= 0 {
            return Err(ValidationError::InvalidBudget);
        }
        if self.sell_rate_percent > 100 {
            return Err(ValidationError::InvalidSellRate);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_budget: default_starting_budget(),
            sell_rate_percent: default_sell_rate(),
            bonus_cap: None,
        }
    }
}

fn default_starting_budget() -> i64 {
    120
}

fn default_sell_rate() -> u32 {
    50
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.starting_budget, 120);
        assert_eq!(config.sell_rate_percent, 50);
        assert!(config.bonus_cap.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sell_rate_over_100_rejected() {
        let config = GameConfig {
            sell_rate_percent: 150,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidSellRate));
    }

    #[test]
    fn test_non_positive_budget_rejected() {
        let config = GameConfig {
            starting_budget: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidBudget));
    }
}
