//! CreateTeamHandler - command handler for team registration at login.

use std::sync::Arc;

use crate::application::error::AppError;
use crate::domain::foundation::{House, TeamId, Timestamp};
use crate::domain::scoring::GameRules;
use crate::domain::team::TeamProfile;
use crate::ports::{TeamRecord, TeamRepository};

/// Command to register a new team with its starting budget.
#[derive(Debug, Clone)]
pub struct CreateTeamCommand {
    pub grade: u8,
    pub house: House,
    pub team_name: String,
}

/// Handler for registering teams.
pub struct CreateTeamHandler {
    teams: Arc<dyn TeamRepository>,
    rules: GameRules,
}

impl CreateTeamHandler {
    pub fn new(teams: Arc<dyn TeamRepository>, rules: GameRules) -> Self {
        Self { teams, rules }
    }

    pub async fn handle(&self, cmd: CreateTeamCommand) -> Result<TeamRecord, AppError> {
        let profile = TeamProfile::new(cmd.grade, cmd.house, &cmd.team_name, &self.rules)?;

        let now = Timestamp::now();
        let id = TeamId::derive(cmd.house, profile.team_name(), now);
        let record = TeamRecord::new(id, profile, now);

        self.teams.save(&record).await?;

        tracing::info!(team_id = %record.id, house = %cmd.house, "Team registered");
        Ok(record)
    }
}
