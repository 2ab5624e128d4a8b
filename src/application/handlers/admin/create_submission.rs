//! CreateSubmissionHandler - admin-initiated submission of an active team.
//!
//! One retirement policy applies no matter who submits: an admin-created
//! submission follows the same move semantics as student self-submission,
//! so the team record never lingers in the active collection.

use std::sync::Arc;

use crate::application::error::AppError;
use crate::domain::foundation::{SubmissionId, TeamId, Timestamp};
use crate::domain::submission::Submission;
use crate::ports::{SubmissionRepository, TeamRepository};

/// Command to submit a team's build on its behalf.
#[derive(Debug, Clone)]
pub struct CreateSubmissionCommand {
    pub team_id: TeamId,
}

/// Handler for admin-initiated submissions.
pub struct CreateSubmissionHandler {
    teams: Arc<dyn TeamRepository>,
    submissions: Arc<dyn SubmissionRepository>,
}

impl CreateSubmissionHandler {
    pub fn new(teams: Arc<dyn TeamRepository>, submissions: Arc<dyn SubmissionRepository>) -> Self {
        Self { teams, submissions }
    }

    pub async fn handle(&self, cmd: CreateSubmissionCommand) -> Result<Submission, AppError> {
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
            "Team submitted by admin, team retired"
        );
        Ok(submission)
    }
}
