//! Team Repository Port - persistence interface for active teams.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::StorageError;
use crate::domain::foundation::{House, TeamId, Timestamp};
use crate::domain::team::TeamProfile;

/// A team profile as persisted: the profile plus its id and write timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub id: TeamId,

    #[serde(flatten)]
    pub profile: TeamProfile,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TeamRecord {
    /// Wraps a fresh profile for its first save.
    pub fn new(id: TeamId, profile: TeamProfile, at: Timestamp) -> Self {
        Self {
            id,
            profile,
            created_at: at,
            updated_at: at,
        }
    }

    /// Stamps an update time before a save.
    pub fn touched(mut self, at: Timestamp) -> Self {
        self.updated_at = at;
        self
    }
}

/// Port for persisting and loading active team records.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Create or update a team record.
    ///
    /// # Errors
    /// Returns `StorageError` if the write fails.
    async fn save(&self, record: &TeamRecord) -> Result<(), StorageError>;

    /// Load a team record by id.
    ///
    /// Returns `None` when no record exists; absence is a normal "new
    /// session" condition, not an error.
    async fn find_by_id(&self, id: &TeamId) -> Result<Option<TeamRecord>, StorageError>;

    /// List every active team.
    async fn list_all(&self) -> Result<Vec<TeamRecord>, StorageError>;

    /// List active teams in one house.
    async fn list_by_house(&self, house: House) -> Result<Vec<TeamRecord>, StorageError> {
        let all = self.list_all().await?;
        Ok(all.into_iter().filter(|t| t.profile.house() == house).collect())
    }

    /// Delete a team record; deleting an absent record is a no-op.
    async fn delete(&self, id: &TeamId) -> Result<(), StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::GameRules;

    #[test]
    fn test_record_round_trips_through_json() {
        let profile = TeamProfile::new(1, House::Jaguar, "Wire Team", &GameRules::default()).unwrap();
        let at = Timestamp::from_unix_millis(1_700_000_000_000);
        let id = TeamId::derive(House::Jaguar, "Wire Team", at);
        let record = TeamRecord::new(id, profile, at);

        let json = serde_json::to_string(&record).unwrap();
        let back: TeamRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_touched_updates_only_updated_at() {
        let profile = TeamProfile::new(1, House::Lynx, "Stamp", &GameRules::default()).unwrap();
        let created = Timestamp::from_unix_millis(1000);
        let id = TeamId::derive(House::Lynx, "Stamp", created);
        let record = TeamRecord::new(id, profile, created);

        let later = Timestamp::from_unix_millis(2000);
        let touched = record.clone().touched(later);
        assert_eq!(touched.created_at, created);
        assert_eq!(touched.updated_at, later);
    }
}
