//! Local File Submission Repository
//!
//! Persists every submission in a single JSON array file, mirroring the
//! array-of-submissions record the classroom clients kept in local storage.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;

use crate::domain::foundation::SubmissionId;
use crate::domain::submission::Submission;
use crate::ports::{StorageError, SubmissionRepository};

/// File-backed store for submissions.
#[derive(Debug, Clone)]
pub struct LocalSubmissionRepository {
    path: PathBuf,
    // Serializes read-modify-write cycles on the array file.
    write_lock: Arc<Mutex<()>>,
}

impl LocalSubmissionRepository {
    /// Create a store rooted at a data directory.
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            path: data_dir.as_ref().join("submissions.json"),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    async fn read_all(&self) -> Result<Vec<Submission>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(&self.path)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;

        serde_json::from_str(&json).map_err(|e| StorageError::DeserializationFailed(e.to_string()))
    }

    async fn write_all(&self, submissions: &[Submission]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::Io(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(submissions)
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;

        fs::write(&self.path, json)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))
    }
}

#[async_trait]
impl SubmissionRepository for LocalSubmissionRepository {
    async fn save(&self, submission: &Submission) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut submissions = self.read_all().await?;

        match submissions.iter_mut().find(|s| s.id() == submission.id()) {
            Some(existing) => *existing = submission.clone(),
            None => submissions.push(submission.clone()),
        }

        self.write_all(&submissions).await
    }

    async fn find_by_id(&self, id: &SubmissionId) -> Result<Option<Submission>, StorageError> {
        let submissions = self.read_all().await?;
        Ok(submissions.into_iter().find(|s| s.id() == id))
    }

    async fn list_all(&self) -> Result<Vec<Submission>, StorageError> {
        self.read_all().await
    }

    async fn delete(&self, id: &SubmissionId) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut submissions = self.read_all().await?;
        submissions.retain(|s| s.id() != id);
        self.write_all(&submissions).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{House, Timestamp};
    use crate::domain::scoring::{GameRules, ScoreSheet};
    use crate::domain::team::TeamProfile;
    use tempfile::TempDir;

    fn test_submission(name: &str) -> Submission {
        let profile = TeamProfile::new(1, House::Jaguar, name, &GameRules::default()).unwrap();
        Submission::from_team(SubmissionId::new(), profile, Timestamp::from_unix_millis(0))
    }

    #[tokio::test]
    async fn test_save_and_list_round_trip() {
        let dir = TempDir::new().unwrap();
        let repo = LocalSubmissionRepository::new(dir.path());

        repo.save(&test_submission("Alpha")).await.unwrap();
        repo.save(&test_submission("Beta")).await.unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].team_name(), "Alpha");
        assert_eq!(all[1].team_name(), "Beta");
    }

    #[tokio::test]
    async fn test_save_updates_existing_submission() {
        let dir = TempDir::new().unwrap();
        let repo = LocalSubmissionRepository::new(dir.path());
        let rules = GameRules::default();

        let mut submission = test_submission("Rescored");
        repo.save(&submission).await.unwrap();

        let sheet = ScoreSheet::new(10, 10, 1, 5, "").unwrap();
        submission.apply_scores(sheet, "teacher", Timestamp::from_unix_millis(1), &rules);
        repo.save(&submission).await.unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert!(all[0].is_scored());
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let dir = TempDir::new().unwrap();
        let repo = LocalSubmissionRepository::new(dir.path());
        let submission = test_submission("Findable");
        repo.save(&submission).await.unwrap();

        let found = repo.find_by_id(submission.id()).await.unwrap();
        assert_eq!(found.as_ref().map(|s| s.team_name()), Some("Findable"));

        let missing = repo.find_by_id(&SubmissionId::new()).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_delete_filters_array() {
        let dir = TempDir::new().unwrap();
        let repo = LocalSubmissionRepository::new(dir.path());
        let keep = test_submission("Keep");
        let drop = test_submission("Drop");
        repo.save(&keep).await.unwrap();
        repo.save(&drop).await.unwrap();

        repo.delete(drop.id()).await.unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].team_name(), "Keep");
    }

    #[tokio::test]
    async fn test_list_on_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let repo = LocalSubmissionRepository::new(dir.path());
        assert!(repo.list_all().await.unwrap().is_empty());
    }
}
