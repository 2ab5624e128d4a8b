//! RemoveFromCartHandler - command handler for dropping a cart line.

use std::sync::Arc;

use crate::application::error::AppError;
use crate::domain::foundation::{TeamId, Timestamp};
use crate::ports::{TeamRecord, TeamRepository};

/// Command to remove one part's line from a team's cart.
#[derive(Debug, Clone)]
pub struct RemoveFromCartCommand {
    pub team_id: TeamId,
    pub part_id: String,
}

/// Handler for removing cart lines.
pub struct RemoveFromCartHandler {
    teams: Arc<dyn TeamRepository>,
}

impl RemoveFromCartHandler {
    pub fn new(teams: Arc<dyn TeamRepository>) -> Self {
        Self { teams }
    }

    pub async fn handle(&self, cmd: RemoveFromCartCommand) -> Result<TeamRecord, AppError> {
        let mut record = self
            .teams
            .find_by_id(&cmd.team_id)
            .await?
            .ok_or(AppError::TeamNotFound(cmd.team_id))?;

        // Removing a part that isn't in the cart is a no-op.
        record.profile.remove_from_cart(&cmd.part_id);
        let record = record.touched(Timestamp::now());
        self.teams.save(&record).await?;

        Ok(record)
    }
}
