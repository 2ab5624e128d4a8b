//! Firestore Submission Repository
//!
//! Persists submissions in the `submissions` collection, keyed by the
//! generated submission id.

use async_trait::async_trait;
use std::sync::Arc;

use super::client::FirestoreClient;
use crate::domain::foundation::SubmissionId;
use crate::domain::submission::Submission;
use crate::ports::{StorageError, SubmissionRepository};

/// Name of the submissions collection.
pub const SUBMISSIONS_COLLECTION: &str = "submissions";

/// Submission repository backed by Firestore.
pub struct FirestoreSubmissionRepository {
    client: Arc<FirestoreClient>,
}

impl FirestoreSubmissionRepository {
    /// Creates a repository over a shared client.
    pub fn new(client: Arc<FirestoreClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SubmissionRepository for FirestoreSubmissionRepository {
    async fn save(&self, submission: &Submission) -> Result<(), StorageError> {
        let body = serde_json::to_value(submission)
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;
        self.client
            .set_document(SUBMISSIONS_COLLECTION, &submission.id().to_string(), &body)
            .await
    }

    async fn find_by_id(&self, id: &SubmissionId) -> Result<Option<Submission>, StorageError> {
        match self
            .client
            .get_document(SUBMISSIONS_COLLECTION, &id.to_string())
            .await?
        {
            Some(fields) => serde_json::from_value(fields)
                .map(Some)
                .map_err(|e| StorageError::DeserializationFailed(e.to_string())),
            None => Ok(None),
        }
    }

    async fn list_all(&self) -> Result<Vec<Submission>, StorageError> {
        let documents = self.client.list_documents(SUBMISSIONS_COLLECTION).await?;
        let mut submissions: Vec<Submission> = documents
            .into_iter()
            .map(|doc| {
                serde_json::from_value(doc.fields)
                    .map_err(|e| StorageError::DeserializationFailed(e.to_string()))
            })
            .collect::<Result<_, _>>()?;

        // List order from the API is by document id; arrival order is what
        // the leaderboard's stable sort expects.
        submissions.sort_by_key(|s| *s.submitted_at());
        Ok(submissions)
    }

    async fn delete(&self, id: &SubmissionId) -> Result<(), StorageError> {
        self.client
            .delete_document(SUBMISSIONS_COLLECTION, &id.to_string())
            .await
    }
}
