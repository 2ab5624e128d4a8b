//! SubmitBuildHandler - command handler for turning a team into a submission.
//!
//! Submission is a move, not a copy-and-keep: the frozen snapshot is written
//! to the submissions store and the active team record is retired in the same
//! operation. The same policy applies when an admin submits on a team's
//! behalf.

use std::sync::Arc;

use crate::application::error::AppError;
use crate::domain::foundation::{SubmissionId, TeamId, Timestamp};
use crate::domain::submission::Submission;
use crate::ports::{SubmissionRepository, TeamRepository};

/// Command to submit a team's build for judging.
#[derive(Debug, Clone)]
pub struct SubmitBuildCommand {
    pub team_id: TeamId,
}

/// Handler for build submission.
pub struct SubmitBuildHandler {
    teams: Arc<dyn TeamRepository>,
    submissions: Arc<dyn SubmissionRepository>,
}

impl SubmitBuildHandler {
    pub fn new(teams: Arc<dyn TeamRepository>, submissions: Arc<dyn SubmissionRepository>) -> Self {
        Self { teams, submissions }
    }

    pub async fn handle(&self, cmd: SubmitBuildCommand) -> Result<Submission, AppError> {
        let record = self
            .teams
            .find_by_id(&cmd.team_id)
            .await?
            .ok_or(AppError::TeamNotFound(cmd.team_id))?;

        let submission =
            Submission::from_team(SubmissionId::new(), record.profile, Timestamp::now());

        self.submissions.save(&submission).await?;
        self.teams.delete(&record.id).await?;

        tracing::info!(
            team_id = %record.id,
            submission_id = %submission.id(),
            "Build submitted, team retired"
        );
        Ok(submission)
    }
}
