//! Submission Repository Port - persistence interface for submitted builds.

use async_trait::async_trait;

use super::StorageError;
use crate::domain::foundation::{House, SubmissionId};
use crate::domain::submission::Submission;

/// Port for persisting and loading submissions.
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Create or update a submission.
    ///
    /// # Errors
    /// Returns `StorageError` if the write fails.
    async fn save(&self, submission: &Submission) -> Result<(), StorageError>;

    /// Load a submission by id.
    async fn find_by_id(&self, id: &SubmissionId) -> Result<Option<Submission>, StorageError>;

    /// List every submission, in arrival order.
    async fn list_all(&self) -> Result<Vec<Submission>, StorageError>;

    /// List submissions from one house, in arrival order.
    async fn list_by_house(&self, house: House) -> Result<Vec<Submission>, StorageError> {
        let all = self.list_all().await?;
        Ok(all.into_iter().filter(|s| s.house() == house).collect())
    }

    /// Delete a submission; deleting an absent record is a no-op.
    async fn delete(&self, id: &SubmissionId) -> Result<(), StorageError>;
}
