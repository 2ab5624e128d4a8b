//! ScoreSubmissionHandler - command handler for judge score entry.

use std::sync::Arc;

use crate::application::error::AppError;
use crate::domain::foundation::{SubmissionId, Timestamp};
use crate::domain::scoring::{GameRules, ScoreSheet};
use crate::domain::submission::Submission;
use crate::ports::SubmissionRepository;

/// Command carrying one judge's scores for a submission.
///
/// Re-scoring an already-scored submission overwrites the previous sheet;
/// concurrent judges race last-write-wins.
#[derive(Debug, Clone)]
pub struct ScoreSubmissionCommand {
    pub submission_id: SubmissionId,
    pub rover_build: i64,
    pub coding: i64,
    pub items_collected: i64,
    pub core_values: i64,
    pub notes: String,
    pub scored_by: String,
}

/// Handler for saving judge scores.
pub struct ScoreSubmissionHandler {
    submissions: Arc<dyn SubmissionRepository>,
    rules: GameRules,
}

impl ScoreSubmissionHandler {
    pub fn new(submissions: Arc<dyn SubmissionRepository>, rules: GameRules) -> Self {
        Self { submissions, rules }
    }

    pub async fn handle(&self, cmd: ScoreSubmissionCommand) -> Result<Submission, AppError> {
        let sheet = ScoreSheet::new(
            cmd.rover_build,
            cmd.coding,
            cmd.items_collected,
            cmd.core_values,
            cmd.notes,
        )?;

        let mut submission = self
            .submissions
            .find_by_id(&cmd.submission_id)
            .await?
            .ok_or(AppError::SubmissionNotFound(cmd.submission_id))?;

        submission.apply_scores(sheet, cmd.scored_by, Timestamp::now(), &self.rules);
        self.submissions.save(&submission).await?;

        tracing::info!(
            submission_id = %submission.id(),
            total = submission.effective_total(&self.rules),
            "Submission scored"
        );
        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySubmissionRepository;
    use crate::domain::foundation::{House, ValidationError};
    use crate::domain::team::TeamProfile;

    async fn seeded_submission(submissions: &InMemorySubmissionRepository) -> SubmissionId {
        let profile = TeamProfile::new(1, House::Lynx, "Judged", &GameRules::default()).unwrap();
        let submission =
            Submission::from_team(SubmissionId::new(), profile, Timestamp::from_unix_millis(0));
        submissions.save(&submission).await.unwrap();
        *submission.id()
    }

    fn command(submission_id: SubmissionId) -> ScoreSubmissionCommand {
        ScoreSubmissionCommand {
            submission_id,
            rover_build: 15,
            coding: 20,
            items_collected: 4,
            core_values: 8,
            notes: "clean run".to_string(),
            scored_by: "teacher".to_string(),
        }
    }

    #[tokio::test]
    async fn test_scores_are_saved_with_live_total() {
        let submissions = Arc::new(InMemorySubmissionRepository::new());
        let id = seeded_submission(&submissions).await;
        let handler = ScoreSubmissionHandler::new(submissions.clone(), GameRules::default());

        let scored = handler.handle(command(id)).await.unwrap();

        // Full 120 KB unspent: bonus 60, total 15+20+12+8+60.
        assert_eq!(scored.effective_total(&GameRules::default()), 115);
        assert_eq!(scored.scored_by(), Some("teacher"));

        let stored = submissions.find_by_id(&id).await.unwrap().unwrap();
        assert!(stored.is_scored());
    }

    #[tokio::test]
    async fn test_out_of_range_scores_are_rejected() {
        let submissions = Arc::new(InMemorySubmissionRepository::new());
        let id = seeded_submission(&submissions).await;
        let handler = ScoreSubmissionHandler::new(submissions.clone(), GameRules::default());

        let result = handler
            .handle(ScoreSubmissionCommand {
                rover_build: 21,
                ..command(id)
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::Validation(ValidationError::OutOfRange { .. }))
        ));
        let stored = submissions.find_by_id(&id).await.unwrap().unwrap();
        assert!(!stored.is_scored());
    }

    #[tokio::test]
    async fn test_missing_submission_is_not_found() {
        let handler = ScoreSubmissionHandler::new(
            Arc::new(InMemorySubmissionRepository::new()),
            GameRules::default(),
        );

        let result = handler.handle(command(SubmissionId::new())).await;
        assert!(matches!(result, Err(AppError::SubmissionNotFound(_))));
    }
}
