//! Local File Team Repository
//!
//! Persists one JSON file per team under `<data_dir>/teams/`. This is the
//! fallback store: always written, and read whenever the remote store is
//! unavailable.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::TeamId;
use crate::ports::{StorageError, TeamRecord, TeamRepository};

/// File-backed store for active team records.
#[derive(Debug, Clone)]
pub struct LocalTeamRepository {
    teams_dir: PathBuf,
}

impl LocalTeamRepository {
    /// Create a store rooted at a data directory.
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            teams_dir: data_dir.as_ref().join("teams"),
        }
    }

    fn team_path(&self, id: &TeamId) -> PathBuf {
        self.teams_dir.join(format!("{}.json", id))
    }

    async fn ensure_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.teams_dir)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))
    }
}

#[async_trait]
impl TeamRepository for LocalTeamRepository {
    async fn save(&self, record: &TeamRecord) -> Result<(), StorageError> {
        self.ensure_dir().await?;

        let json = serde_json::to_string_pretty(record)
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;

        fs::write(self.team_path(&record.id), json)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))
    }

    async fn find_by_id(&self, id: &TeamId) -> Result<Option<TeamRecord>, StorageError> {
        let path = self.team_path(id);
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;

        let record = serde_json::from_str(&json)
            .map_err(|e| StorageError::DeserializationFailed(e.to_string()))?;

        Ok(Some(record))
    }

    async fn list_all(&self) -> Result<Vec<TeamRecord>, StorageError> {
        if !self.teams_dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries = fs::read_dir(&self.teams_dir)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;

        let mut records = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?
        {
            let path = entry.path();
            if path.extension().map(|ext| ext == "json") != Some(true) {
                continue;
            }
            let json = fs::read_to_string(&path)
                .await
                .map_err(|e| StorageError::Io(e.to_string()))?;
            let record: TeamRecord = serde_json::from_str(&json)
                .map_err(|e| StorageError::DeserializationFailed(e.to_string()))?;
            records.push(record);
        }

        // Directory order is arbitrary; sort by creation for stable listings.
        records.sort_by_key(|r| r.created_at);
        Ok(records)
    }

    async fn delete(&self, id: &TeamId) -> Result<(), StorageError> {
        let path = self.team_path(id);
        if path.exists() {
            fs::remove_file(&path)
                .await
                .map_err(|e| StorageError::Io(e.to_string()))?;
        }
        Ok(())
    }
}
