//! GetTeamHandler - query handler for loading an active team.

use std::sync::Arc;

use crate::application::error::AppError;
use crate::domain::foundation::TeamId;
use crate::ports::{TeamRecord, TeamRepository};

/// Query for one team's current state.
#[derive(Debug, Clone)]
pub struct GetTeamQuery {
    pub team_id: TeamId,
}

/// Handler for loading teams.
pub struct GetTeamHandler {
    teams: Arc<dyn TeamRepository>,
}

impl GetTeamHandler {
    pub fn new(teams: Arc<dyn TeamRepository>) -> Self {
        Self { teams }
    }

    pub async fn handle(&self, query: GetTeamQuery) -> Result<TeamRecord, AppError> {
        self.teams
            .find_by_id(&query.team_id)
            .await?
            .ok_or(AppError::TeamNotFound(query.team_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryTeamRepository;
    use crate::domain::foundation::{House, Timestamp};
    use crate::domain::scoring::GameRules;
    use crate::domain::team::TeamProfile;

    #[tokio::test]
    async fn test_loads_saved_team() {
        let teams = Arc::new(InMemoryTeamRepository::new());
        let at = Timestamp::from_unix_millis(1_700_000_000_000);
        let profile = TeamProfile::new(1, House::Cougar, "Found", &GameRules::default()).unwrap();
        let record = TeamRecord::new(TeamId::derive(House::Cougar, "Found", at), profile, at);
        teams.save(&record).await.unwrap();

        let handler = GetTeamHandler::new(teams);
        let loaded = handler
            .handle(GetTeamQuery {
                team_id: record.id.clone(),
            })
            .await
            .unwrap();

        assert_eq!(loaded, record);
    }

    #[tokio::test]
    async fn test_missing_team_is_not_found() {
        let handler = GetTeamHandler::new(Arc::new(InMemoryTeamRepository::new()));
        let result = handler
            .handle(GetTeamQuery {
                team_id: TeamId::from_string("lynx-ghost-1").unwrap(),
            })
            .await;

        assert!(matches!(result, Err(AppError::TeamNotFound(_))));
    }
}
