//! AddToCartHandler - command handler for the shop's add-to-cart action.

use std::sync::Arc;

use crate::application::error::AppError;
use crate::domain::catalog::find_part;
use crate::domain::foundation::{TeamId, Timestamp};
use crate::domain::team::{CartItem, TeamError};
use crate::ports::{TeamRecord, TeamRepository};

/// One requested line: a catalog part and how many of it.
#[derive(Debug, Clone)]
pub struct CartSelection {
    pub part_id: String,
    pub quantity: u32,
}

/// Command to add parts to a team's cart.
///
/// Prices are snapshotted from the catalog here, not taken from the client.
/// No budget check happens at this step; overspending only blocks checkout.
#[derive(Debug, Clone)]
pub struct AddToCartCommand {
    pub team_id: TeamId,
    pub items: Vec<CartSelection>,
}

/// Handler for adding parts to carts.
pub struct AddToCartHandler {
    teams: Arc<dyn TeamRepository>,
}

impl AddToCartHandler {
    pub fn new(teams: Arc<dyn TeamRepository>) -> Self {
        Self { teams }
    }

    pub async fn handle(&self, cmd: AddToCartCommand) -> Result<TeamRecord, AppError> {
        let lines = cmd
            .items
            .iter()
            .map(|selection| {
                find_part(&selection.part_id)
                    .map(|part| CartItem::from_part(part, selection.quantity))
                    .ok_or_else(|| TeamError::UnknownPart {
                        part_id: selection.part_id.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut record = self
            .teams
            .find_by_id(&cmd.team_id)
            .await?
            .ok_or(AppError::TeamNotFound(cmd.team_id))?;

        record.profile.add_to_cart(lines);
        let record = record.touched(Timestamp::now());
        self.teams.save(&record).await?;

        Ok(record)
    }
}
