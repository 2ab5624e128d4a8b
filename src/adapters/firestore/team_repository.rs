//! Firestore Team Repository
//!
//! Persists team records in the `teams` collection, keyed by the derived
//! team id. The id lives in the document key, not in the document body.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use super::client::FirestoreClient;
use crate::domain::foundation::{TeamId, Timestamp};
use crate::ports::{StorageError, TeamRecord, TeamRepository};

/// Name of the active-teams collection.
pub const TEAMS_COLLECTION: &str = "teams";

/// Team repository backed by Firestore.
pub struct FirestoreTeamRepository {
    client: Arc<FirestoreClient>,
}

impl FirestoreTeamRepository {
    /// Creates a repository over a shared client.
    pub fn new(client: Arc<FirestoreClient>) -> Self {
        Self { client }
    }

    fn encode(record: &TeamRecord) -> Result<Value, StorageError> {
        let mut value = serde_json::to_value(record)
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;
        // The id is the document key.
        if let Some(map) = value.as_object_mut() {
            map.remove("id");
        }
        Ok(value)
    }

    fn decode(id: &str, mut fields: Value) -> Result<TeamRecord, StorageError> {
        if let Some(map) = fields.as_object_mut() {
            map.insert("id".to_string(), Value::String(id.to_string()));
            // Records written before timestamps were stamped get the epoch.
            let epoch = serde_json::to_value(Timestamp::from_unix_millis(0))
                .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;
            map.entry("createdAt").or_insert_with(|| epoch.clone());
            map.entry("updatedAt").or_insert(epoch);
        }
        serde_json::from_value(fields)
            .map_err(|e| StorageError::DeserializationFailed(e.to_string()))
    }
}

#[async_trait]
impl TeamRepository for FirestoreTeamRepository {
    async fn save(&self, record: &TeamRecord) -> Result<(), StorageError> {
        let body = Self::encode(record)?;
        self.client
            .set_document(TEAMS_COLLECTION, record.id.as_str(), &body)
            .await
    }

    async fn find_by_id(&self, id: &TeamId) -> Result<Option<TeamRecord>, StorageError> {
        match self.client.get_document(TEAMS_COLLECTION, id.as_str()).await? {
            Some(fields) => Ok(Some(Self::decode(id.as_str(), fields)?)),
            None => Ok(None),
        }
    }

    async fn list_all(&self) -> Result<Vec<TeamRecord>, StorageError> {
        let documents = self.client.list_documents(TEAMS_COLLECTION).await?;
        documents
            .into_iter()
            .map(|doc| Self::decode(&doc.id, doc.fields))
            .collect()
    }

    async fn delete(&self, id: &TeamId) -> Result<(), StorageError> {
        self.client.delete_document(TEAMS_COLLECTION, id.as_str()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::House;
    use crate::domain::scoring::GameRules;
    use crate::domain::team::TeamProfile;

    fn test_record() -> TeamRecord {
        let at = Timestamp::from_unix_millis(1_700_000_000_000);
        let profile = TeamProfile::new(1, House::Lynx, "Encode Me", &GameRules::default()).unwrap();
        TeamRecord::new(TeamId::derive(House::Lynx, "Encode Me", at), profile, at)
    }

    #[test]
    fn test_encode_strips_id() {
        let body = FirestoreTeamRepository::encode(&test_record()).unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body.get("teamName").unwrap(), "Encode Me");
    }

    #[test]
    fn test_decode_injects_id() {
        let record = test_record();
        let body = FirestoreTeamRepository::encode(&record).unwrap();
        let decoded = FirestoreTeamRepository::decode(record.id.as_str(), body).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_decode_defaults_missing_timestamps() {
        let body = serde_json::json!({
            "grade": 1,
            "house": "Lynx",
            "teamName": "Legacy",
            "budget": 120,
            "spent": 0,
            "cart": []
        });
        let decoded = FirestoreTeamRepository::decode("lynx-legacy-1", body).unwrap();
        assert_eq!(decoded.profile.team_name(), "Legacy");
        assert_eq!(decoded.created_at, Timestamp::from_unix_millis(0));
    }
}
