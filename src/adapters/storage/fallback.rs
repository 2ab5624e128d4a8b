//! Fallback Repository Adapters
//!
//! Wrap a remote repository with a local one. Writes go to the remote
//! best-effort and always to the local store; reads try the remote first and
//! fall back to local. A remote failure is a warning, never an error to the
//! caller, so the user flow keeps working in local-only mode.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::{SubmissionId, TeamId};
use crate::domain::submission::Submission;
use crate::ports::{StorageError, SubmissionRepository, TeamRecord, TeamRepository};

/// Team repository with remote-first reads and write-through local copies.
pub struct FallbackTeamRepository {
    remote: Arc<dyn TeamRepository>,
    local: Arc<dyn TeamRepository>,
}

impl FallbackTeamRepository {
    /// Wraps a remote repository with a local fallback.
    pub fn new(remote: Arc<dyn TeamRepository>, local: Arc<dyn TeamRepository>) -> Self {
        Self { remote, local }
    }
}

#[async_trait]
impl TeamRepository for FallbackTeamRepository {
    async fn save(&self, record: &TeamRecord) -> Result<(), StorageError> {
        if let Err(e) = self.remote.save(record).await {
            tracing::warn!(team_id = %record.id, error = %e, "Remote team save failed, keeping local copy only");
        }
        self.local.save(record).await
    }

    async fn find_by_id(&self, id: &TeamId) -> Result<Option<TeamRecord>, StorageError> {
        match self.remote.find_by_id(id).await {
            Ok(Some(record)) => Ok(Some(record)),
            // Absent remotely can still exist locally after a partial write.
            Ok(None) => self.local.find_by_id(id).await,
            Err(e) => {
                tracing::warn!(team_id = %id, error = %e, "Remote team load failed, reading local copy");
                self.local.find_by_id(id).await
            }
        }
    }

    async fn list_all(&self) -> Result<Vec<TeamRecord>, StorageError> {
        match self.remote.list_all().await {
            Ok(records) => Ok(records),
            Err(e) => {
                tracing::warn!(error = %e, "Remote team listing failed, reading local copies");
                self.local.list_all().await
            }
        }
    }

    async fn delete(&self, id: &TeamId) -> Result<(), StorageError> {
        if let Err(e) = self.remote.delete(id).await {
            tracing::warn!(team_id = %id, error = %e, "Remote team delete failed");
        }
        self.local.delete(id).await
    }
}

/// Submission repository with remote-first reads and write-through local
/// copies.
pub struct FallbackSubmissionRepository {
    remote: Arc<dyn SubmissionRepository>,
    local: Arc<dyn SubmissionRepository>,
}

impl FallbackSubmissionRepository {
    /// Wraps a remote repository with a local fallback.
    pub fn new(
        remote: Arc<dyn SubmissionRepository>,
        local: Arc<dyn SubmissionRepository>,
    ) -> Self {
        Self { remote, local }
    }
}

#[async_trait]
impl SubmissionRepository for FallbackSubmissionRepository {
    async fn save(&self, submission: &Submission) -> Result<(), StorageError> {
        if let Err(e) = self.remote.save(submission).await {
            tracing::warn!(submission_id = %submission.id(), error = %e, "Remote submission save failed, keeping local copy only");
        }
        self.local.save(submission).await
    }

    async fn find_by_id(&self, id: &SubmissionId) -> Result<Option<Submission>, StorageError> {
        match self.remote.find_by_id(id).await {
            Ok(Some(submission)) => Ok(Some(submission)),
            Ok(None) => self.local.find_by_id(id).await,
            Err(e) => {
                tracing::warn!(submission_id = %id, error = %e, "Remote submission load failed, reading local copy");
                self.local.find_by_id(id).await
            }
        }
    }

    async fn list_all(&self) -> Result<Vec<Submission>, StorageError> {
        match self.remote.list_all().await {
            Ok(submissions) => Ok(submissions),
            Err(e) => {
                tracing::warn!(error = %e, "Remote submission listing failed, reading local copies");
                self.local.list_all().await
            }
        }
    }

    async fn delete(&self, id: &SubmissionId) -> Result<(), StorageError> {
        if let Err(e) = self.remote.delete(id).await {
            tracing::warn!(submission_id = %id, error = %e, "Remote submission delete failed");
        }
        self.local.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::in_memory::{
        InMemorySubmissionRepository, InMemoryTeamRepository,
    };
    use crate::domain::foundation::{House, Timestamp};
    use crate::domain::scoring::GameRules;
    use crate::domain::team::TeamProfile;

    /// Remote double that always fails.
    struct BrokenTeamRepository;

    #[async_trait]
    impl TeamRepository for BrokenTeamRepository {
        async fn save(&self, _record: &TeamRecord) -> Result<(), StorageError> {
            Err(StorageError::remote("connection refused"))
        }

        async fn find_by_id(&self, _id: &TeamId) -> Result<Option<TeamRecord>, StorageError> {
            Err(StorageError::remote("connection refused"))
        }

        async fn list_all(&self) -> Result<Vec<TeamRecord>, StorageError> {
            Err(StorageError::remote("connection refused"))
        }

        async fn delete(&self, _id: &TeamId) -> Result<(), StorageError> {
            Err(StorageError::remote("connection refused"))
        }
    }

    struct BrokenSubmissionRepository;

    #[async_trait]
    impl SubmissionRepository for BrokenSubmissionRepository {
        async fn save(&self, _submission: &Submission) -> Result<(), StorageError> {
            Err(StorageError::remote("connection refused"))
        }

        async fn find_by_id(&self, _id: &SubmissionId) -> Result<Option<Submission>, StorageError> {
            Err(StorageError::remote("connection refused"))
        }

        async fn list_all(&self) -> Result<Vec<Submission>, StorageError> {
            Err(StorageError::remote("connection refused"))
        }

        async fn delete(&self, _id: &SubmissionId) -> Result<(), StorageError> {
            Err(StorageError::remote("connection refused"))
        }
    }

    fn test_record(name: &str) -> TeamRecord {
        let at = Timestamp::from_unix_millis(1_700_000_000_000);
        let profile = TeamProfile::new(1, House::Lynx, name, &GameRules::default()).unwrap();
        TeamRecord::new(TeamId::derive(House::Lynx, name, at), profile, at)
    }

    #[tokio::test]
    async fn test_broken_remote_still_saves_locally() {
        let local = Arc::new(InMemoryTeamRepository::new());
        let repo = FallbackTeamRepository::new(Arc::new(BrokenTeamRepository), local.clone());
        let record = test_record("Offline");

        repo.save(&record).await.unwrap();

        assert_eq!(local.count().await, 1);
        let loaded = repo.find_by_id(&record.id).await.unwrap();
        assert_eq!(loaded, Some(record));
    }

    #[tokio::test]
    async fn test_broken_remote_lists_from_local() {
        let local = Arc::new(InMemoryTeamRepository::new());
        local.save(&test_record("Cached")).await.unwrap();
        let repo = FallbackTeamRepository::new(Arc::new(BrokenTeamRepository), local);

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_healthy_remote_wins_reads() {
        let remote = Arc::new(InMemoryTeamRepository::new());
        let local = Arc::new(InMemoryTeamRepository::new());
        let repo = FallbackTeamRepository::new(remote.clone(), local.clone());
        let record = test_record("Synced");

        repo.save(&record).await.unwrap();

        // Written through to both stores.
        assert_eq!(remote.count().await, 1);
        assert_eq!(local.count().await, 1);
    }

    #[tokio::test]
    async fn test_read_falls_back_after_partial_write() {
        let remote = Arc::new(InMemoryTeamRepository::new());
        let local = Arc::new(InMemoryTeamRepository::new());
        let record = test_record("Partial");
        // Record only made it to the local store.
        local.save(&record).await.unwrap();

        let repo = FallbackTeamRepository::new(remote, local);
        let loaded = repo.find_by_id(&record.id).await.unwrap();
        assert_eq!(loaded, Some(record));
    }

    #[tokio::test]
    async fn test_submission_fallback_save_and_list() {
        let local = Arc::new(InMemorySubmissionRepository::new());
        let repo = FallbackSubmissionRepository::new(
            Arc::new(BrokenSubmissionRepository),
            local.clone(),
        );

        let profile = TeamProfile::new(1, House::Cougar, "Solo", &GameRules::default()).unwrap();
        let submission =
            Submission::from_team(SubmissionId::new(), profile, Timestamp::from_unix_millis(0));

        repo.save(&submission).await.unwrap();

        assert_eq!(local.count().await, 1);
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }
}
