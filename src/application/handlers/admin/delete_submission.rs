//! DeleteSubmissionHandler - command handler for discarding a submission.

use std::sync::Arc;

use crate::application::error::AppError;
use crate::domain::foundation::SubmissionId;
use crate::ports::SubmissionRepository;

/// Command to delete a submission record.
#[derive(Debug, Clone)]
pub struct DeleteSubmissionCommand {
    pub submission_id: SubmissionId,
}

/// Handler for deleting submissions.
pub struct DeleteSubmissionHandler {
    submissions: Arc<dyn SubmissionRepository>,
}

impl DeleteSubmissionHandler {
    pub fn new(submissions: Arc<dyn SubmissionRepository>) -> Self {
        Self { submissions }
    }

    /// Deleting an absent submission is a no-op, matching the repository
    /// contract.
    pub async fn handle(&self, cmd: DeleteSubmissionCommand) -> Result<(), AppError> {
        self.submissions.delete(&cmd.submission_id).await?;
        tracing::info!(submission_id = %cmd.submission_id, "Submission deleted");
        Ok(())
    }
}
