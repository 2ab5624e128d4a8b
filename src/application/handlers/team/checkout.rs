//! CheckoutHandler - command handler for converting a cart into owned parts.
//!
//! The budget precondition the engine leaves to its caller is enforced here:
//! an overspent cart is rejected before any mutation.

use std::sync::Arc;

use crate::application::error::AppError;
use crate::domain::foundation::{TeamId, Timestamp};
use crate::domain::team::TeamError;
use crate::ports::{TeamRecord, TeamRepository};

/// Command to check out a team's cart.
#[derive(Debug, Clone)]
pub struct CheckoutCommand {
    pub team_id: TeamId,
}

/// Handler for cart checkout.
pub struct CheckoutHandler {
    teams: Arc<dyn TeamRepository>,
}

impl CheckoutHandler {
    pub fn new(teams: Arc<dyn TeamRepository>) -> Self {
        Self { teams }
    }

    pub async fn handle(&self, cmd: CheckoutCommand) -> Result<TeamRecord, AppError> {
        let mut record = self
            .teams
            .find_by_id(&cmd.team_id)
            .await?
            .ok_or(AppError::TeamNotFound(cmd.team_id))?;

        if !record.profile.can_checkout() {
            return Err(AppError::Team(TeamError::BudgetExceeded {
                overdraft: -record.profile.remaining(),
            }));
        }

        record.profile.checkout();
        let record = record.touched(Timestamp::now());
        self.teams.save(&record).await?;

        tracing::debug!(team_id = %record.id, budget = record.profile.budget(), "Cart checked out");
        Ok(record)
    }
}
