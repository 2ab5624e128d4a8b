//! ListSubmissionsHandler - query handler for the judging leaderboard.

use std::sync::Arc;

use crate::application::error::AppError;
use crate::domain::foundation::House;
use crate::domain::scoring::GameRules;
use crate::domain::submission::{rank_submissions, Submission};
use crate::ports::SubmissionRepository;

/// Query for submissions, optionally restricted to one house.
#[derive(Debug, Clone, Default)]
pub struct ListSubmissionsQuery {
    pub house: Option<House>,
}

/// Handler for listing submissions in leaderboard order.
pub struct ListSubmissionsHandler {
    submissions: Arc<dyn SubmissionRepository>,
    rules: GameRules,
}

impl ListSubmissionsHandler {
    pub fn new(submissions: Arc<dyn SubmissionRepository>, rules: GameRules) -> Self {
        Self { submissions, rules }
    }

    /// Returns submissions descending by live total; ties keep arrival order.
    pub async fn handle(&self, query: ListSubmissionsQuery) -> Result<Vec<Submission>, AppError> {
        let mut submissions = match query.house {
            Some(house) => self.submissions.list_by_house(house).await?,
            None => self.submissions.list_all().await?,
        };
        rank_submissions(&mut submissions, &self.rules);
        Ok(submissions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySubmissionRepository;
    use crate::domain::foundation::{SubmissionId, Timestamp};
    use crate::domain::scoring::ScoreSheet;
    use crate::domain::team::TeamProfile;

    async fn seed(
        submissions: &InMemorySubmissionRepository,
        house: House,
        name: &str,
        scores: Option<ScoreSheet>,
    ) {
        let profile = TeamProfile::new(1, house, name, &GameRules::default()).unwrap();
        let mut submission =
            Submission::from_team(SubmissionId::new(), profile, Timestamp::from_unix_millis(0));
        if let Some(sheet) = scores {
            submission.apply_scores(
                sheet,
                "teacher",
                Timestamp::from_unix_millis(0),
                &GameRules::default(),
            );
        }
        submissions.save(&submission).await.unwrap();
    }

    #[tokio::test]
    async fn test_orders_by_live_total_descending() {
        let submissions = Arc::new(InMemorySubmissionRepository::new());
        seed(
            &submissions,
            House::Lynx,
            "Low",
            Some(ScoreSheet::new(5, 5, 0, 2, "").unwrap()),
        )
        .await;
        seed(
            &submissions,
            House::Lynx,
            "High",
            Some(ScoreSheet::new(20, 25, 2, 10, "").unwrap()),
        )
        .await;
        let handler = ListSubmissionsHandler::new(submissions, GameRules::default());

        let ranked = handler.handle(ListSubmissionsQuery::default()).await.unwrap();

        assert_eq!(ranked[0].team_name(), "High");
        assert_eq!(ranked[1].team_name(), "Low");
    }

    #[tokio::test]
    async fn test_filters_by_house() {
        let submissions = Arc::new(InMemorySubmissionRepository::new());
        seed(&submissions, House::Lynx, "Lynx Build", None).await;
        seed(&submissions, House::Panther, "Panther Build", None).await;
        let handler = ListSubmissionsHandler::new(submissions, GameRules::default());

        let panthers = handler
            .handle(ListSubmissionsQuery {
                house: Some(House::Panther),
            })
            .await
            .unwrap();

        assert_eq!(panthers.len(), 1);
        assert_eq!(panthers[0].team_name(), "Panther Build");
    }
}
