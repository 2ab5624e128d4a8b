//! SellItemHandler - command handler for selling owned parts back.

use std::sync::Arc;

use crate::application::error::AppError;
use crate::domain::foundation::{TeamId, Timestamp};
use crate::domain::scoring::GameRules;
use crate::ports::{TeamRecord, TeamRepository};

/// Command to sell owned units of one part back to the shop.
#[derive(Debug, Clone)]
pub struct SellItemCommand {
    pub team_id: TeamId,
    pub part_id: String,
    pub quantity: u32,
}

/// Result of a sale: the updated record and the KB credited.
#[derive(Debug, Clone)]
pub struct SellItemResult {
    pub record: TeamRecord,
    pub credited: i64,
}

/// Handler for sell-backs.
pub struct SellItemHandler {
    teams: Arc<dyn TeamRepository>,
    rules: GameRules,
}

impl SellItemHandler {
    pub fn new(teams: Arc<dyn TeamRepository>, rules: GameRules) -> Self {
        Self { teams, rules }
    }

    pub async fn handle(&self, cmd: SellItemCommand) -> Result<SellItemResult, AppError> {
        let mut record = self
            .teams
            .find_by_id(&cmd.team_id)
            .await?
            .ok_or(AppError::TeamNotFound(cmd.team_id))?;

        let credited = record
            .profile
            .sell_item(&cmd.part_id, cmd.quantity, &self.rules)?;

        let record = record.touched(Timestamp::now());
        self.teams.save(&record).await?;

        tracing::debug!(
            team_id = %record.id,
            part_id = %cmd.part_id,
            credited,
            "Parts sold back"
        );
        Ok(SellItemResult { record, credited })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryTeamRepository;
    use crate::domain::catalog::find_part;
    use crate::domain::foundation::House;
    use crate::domain::team::{CartItem, TeamError, TeamProfile};

    async fn team_owning(teams: &InMemoryTeamRepository, part_id: &str, quantity: u32) -> TeamId {
        let at = Timestamp::from_unix_millis(1_700_000_000_000);
        let mut profile = TeamProfile::new(1, House::Jaguar, "Sellers", &GameRules::default()).unwrap();
        profile.add_to_cart(vec![CartItem::from_part(find_part(part_id).unwrap(), quantity)]);
        profile.checkout();
        let record = TeamRecord::new(TeamId::derive(House::Jaguar, "Sellers", at), profile, at);
        teams.save(&record).await.unwrap();
        record.id
    }

    #[tokio::test]
    async fn test_sale_credits_half_price() {
        let teams = Arc::new(InMemoryTeamRepository::new());
        let team_id = team_owning(&teams, "large_hub", 2).await;
        let handler = SellItemHandler::new(teams, GameRules::default());

        let result = handler
            .handle(SellItemCommand {
                team_id,
                part_id: "large_hub".to_string(),
                quantity: 1,
            })
            .await
            .unwrap();

        assert_eq!(result.credited, 20);
        assert_eq!(result.record.profile.budget(), 60);
        assert_eq!(result.record.profile.owned_quantity("large_hub"), 1);
    }

    #[tokio::test]
    async fn test_overselling_is_rejected_without_mutation() {
        let teams = Arc::new(InMemoryTeamRepository::new());
        let team_id = team_owning(&teams, "small_motor", 2).await;
        let handler = SellItemHandler::new(teams.clone(), GameRules::default());

        let result = handler
            .handle(SellItemCommand {
                team_id: team_id.clone(),
                part_id: "small_motor".to_string(),
                quantity: 3,
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::Team(TeamError::InvalidSellQuantity { .. }))
        ));
        let stored = teams.find_by_id(&team_id).await.unwrap().unwrap();
        assert_eq!(stored.profile.owned_quantity("small_motor"), 2);
    }
}
