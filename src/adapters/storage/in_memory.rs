//! In-Memory Repository Adapters
//!
//! Store teams and submissions in memory. Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{SubmissionId, TeamId};
use crate::domain::submission::Submission;
use crate::ports::{StorageError, SubmissionRepository, TeamRecord, TeamRepository};

/// In-memory store for active team records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTeamRepository {
    records: Arc<RwLock<Vec<TeamRecord>>>,
}

impl InMemoryTeamRepository {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored teams (useful for tests).
    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn save(&self, record: &TeamRecord) -> Result<(), StorageError> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record.clone(),
            None => records.push(record.clone()),
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &TeamId) -> Result<Option<TeamRecord>, StorageError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| &r.id == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<TeamRecord>, StorageError> {
        Ok(self.records.read().await.clone())
    }

    async fn delete(&self, id: &TeamId) -> Result<(), StorageError> {
        self.records.write().await.retain(|r| &r.id != id);
        Ok(())
    }
}

/// In-memory store for submissions, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct InMemorySubmissionRepository {
    submissions: Arc<RwLock<Vec<Submission>>>,
}

impl InMemorySubmissionRepository {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored submissions (useful for tests).
    pub async fn count(&self) -> usize {
        self.submissions.read().await.len()
    }
}

#[async_trait]
impl SubmissionRepository for InMemorySubmissionRepository {
    async fn save(&self, submission: &Submission) -> Result<(), StorageError> {
        let mut submissions = self.submissions.write().await;
        match submissions.iter_mut().find(|s| s.id() == submission.id()) {
            Some(existing) => *existing = submission.clone(),
            None => submissions.push(submission.clone()),
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &SubmissionId) -> Result<Option<Submission>, StorageError> {
        let submissions = self.submissions.read().await;
        Ok(submissions.iter().find(|s| s.id() == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Submission>, StorageError> {
        Ok(self.submissions.read().await.clone())
    }

    async fn delete(&self, id: &SubmissionId) -> Result<(), StorageError> {
        self.submissions.write().await.retain(|s| s.id() != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{House, Timestamp};
    use crate::domain::scoring::GameRules;
    use crate::domain::team::TeamProfile;

    fn test_record(name: &str) -> TeamRecord {
        let at = Timestamp::from_unix_millis(1_700_000_000_000);
        let profile = TeamProfile::new(1, House::Lynx, name, &GameRules::default()).unwrap();
        TeamRecord::new(TeamId::derive(House::Lynx, name, at), profile, at)
    }

    #[tokio::test]
    async fn test_save_and_find_team() {
        let repo = InMemoryTeamRepository::new();
        let record = test_record("Memory Test");

        repo.save(&record).await.unwrap();

        let found = repo.find_by_id(&record.id).await.unwrap();
        assert_eq!(found, Some(record));
    }

    #[tokio::test]
    async fn test_save_upserts_by_id() {
        let repo = InMemoryTeamRepository::new();
        let mut record = test_record("Upsert");

        repo.save(&record).await.unwrap();
        record.updated_at = Timestamp::from_unix_millis(2_000_000_000_000);
        repo.save(&record).await.unwrap();

        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn test_find_missing_team_is_none() {
        let repo = InMemoryTeamRepository::new();
        let missing = TeamId::from_string("lynx-ghost-1").unwrap();
        assert_eq!(repo.find_by_id(&missing).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_team() {
        let repo = InMemoryTeamRepository::new();
        let record = test_record("Doomed");
        repo.save(&record).await.unwrap();

        repo.delete(&record.id).await.unwrap();

        assert_eq!(repo.count().await, 0);
        // Deleting again is a no-op.
        repo.delete(&record.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_by_house_filters() {
        let repo = InMemoryTeamRepository::new();
        let lynx = test_record("Lynx Team");
        let at = Timestamp::from_unix_millis(1);
        let profile = TeamProfile::new(1, House::Cougar, "Cougar Team", &GameRules::default()).unwrap();
        let cougar = TeamRecord::new(TeamId::derive(House::Cougar, "Cougar Team", at), profile, at);
        repo.save(&lynx).await.unwrap();
        repo.save(&cougar).await.unwrap();

        let lynx_teams = repo.list_by_house(House::Lynx).await.unwrap();
        assert_eq!(lynx_teams.len(), 1);
        assert_eq!(lynx_teams[0].profile.team_name(), "Lynx Team");
    }

    #[tokio::test]
    async fn test_submissions_preserve_arrival_order() {
        let repo = InMemorySubmissionRepository::new();
        for name in ["One", "Two", "Three"] {
            let record = test_record(name);
            let submission = Submission::from_team(
                SubmissionId::new(),
                record.profile,
                Timestamp::from_unix_millis(0),
            );
            repo.save(&submission).await.unwrap();
        }

        let all = repo.list_all().await.unwrap();
        let names: Vec<&str> = all.iter().map(|s| s.team_name()).collect();
        assert_eq!(names, vec!["One", "Two", "Three"]);
    }
}
