//! ListTeamsHandler - query handler for the admin view of active teams.

use std::sync::Arc;

use crate::application::error::AppError;
use crate::domain::foundation::House;
use crate::ports::{TeamRecord, TeamRepository};

/// Query for active teams, optionally restricted to one house.
#[derive(Debug, Clone, Default)]
pub struct ListTeamsQuery {
    pub house: Option<House>,
}

/// Handler for listing active teams.
pub struct ListTeamsHandler {
    teams: Arc<dyn TeamRepository>,
}

impl ListTeamsHandler {
    pub fn new(teams: Arc<dyn TeamRepository>) -> Self {
        Self { teams }
    }

    pub async fn handle(&self, query: ListTeamsQuery) -> Result<Vec<TeamRecord>, AppError> {
        let records = match query.house {
            Some(house) => self.teams.list_by_house(house).await?,
            None => self.teams.list_all().await?,
        };
        Ok(records)
    }
}
