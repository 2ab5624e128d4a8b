//! Firestore REST Client
//!
//! Thin document-store client over Firestore's REST v1 API. Speaks plain
//! `serde_json::Value` records; the typed-value envelope is handled by the
//! `value` module. Every call carries the configured request timeout so a
//! slow remote degrades into the local fallback instead of hanging a user
//! action.

use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde_json::{json, Map, Value};
use std::time::Duration;

use super::value::{from_firestore_fields, to_firestore_fields};
use crate::ports::StorageError;

/// Configuration for the Firestore client.
#[derive(Debug, Clone)]
pub struct FirestoreConfig {
    /// Cloud project id.
    pub project_id: String,
    /// API key appended to every request.
    api_key: Option<Secret<String>>,
    /// Base URL for the REST API (default: https://firestore.googleapis.com/v1).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl FirestoreConfig {
    /// Creates a new configuration for a project.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            api_key: None,
            base_url: "https://firestore.googleapis.com/v1".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(Secret::new(api_key.into()));
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(|k| k.expose_secret().as_str())
    }
}

/// A document read back from a collection: its id plus plain JSON fields.
#[derive(Debug, Clone)]
pub struct RemoteDocument {
    pub id: String,
    pub fields: Value,
}

/// Firestore REST client.
pub struct FirestoreClient {
    config: FirestoreConfig,
    client: Client,
}

impl FirestoreClient {
    /// Creates a client with the given configuration.
    ///
    /// # Errors
    /// Returns `StorageError` if the underlying HTTP client cannot be built.
    pub fn new(config: FirestoreConfig) -> Result<Self, StorageError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| StorageError::remote(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents",
            self.config.base_url, self.config.project_id
        )
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}/{}", self.documents_url(), collection, id)
    }

    fn with_key(&self, url: String) -> String {
        match self.config.api_key() {
            Some(key) => format!("{url}?key={key}"),
            None => url,
        }
    }

    fn map_send_error(&self, e: reqwest::Error) -> StorageError {
        if e.is_timeout() {
            StorageError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else {
            StorageError::remote(e.to_string())
        }
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, StorageError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(StorageError::remote(format!("{status}: {body}")))
    }

    /// Creates or fully replaces a document.
    pub async fn set_document(
        &self,
        collection: &str,
        id: &str,
        record: &Value,
    ) -> Result<(), StorageError> {
        let fields = record
            .as_object()
            .map(to_firestore_fields)
            .ok_or_else(|| StorageError::SerializationFailed("record is not an object".into()))?;

        let url = self.with_key(self.document_url(collection, id));
        let response = self
            .client
            .patch(url)
            .json(&json!({ "fields": fields }))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        Self::check_status(response).await?;
        Ok(())
    }

    /// Reads a document; `None` when it does not exist.
    pub async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Value>, StorageError> {
        let url = self.with_key(self.document_url(collection, id));
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = Self::check_status(response).await?;
        let document: Value = response
            .json()
            .await
            .map_err(|e| StorageError::DeserializationFailed(e.to_string()))?;

        Ok(Some(Self::decode_fields(&document)?))
    }

    /// Deletes a document; deleting an absent document succeeds.
    pub async fn delete_document(&self, collection: &str, id: &str) -> Result<(), StorageError> {
        let url = self.with_key(self.document_url(collection, id));
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(());
        }

        Self::check_status(response).await?;
        Ok(())
    }

    /// Lists every document in a collection, following pagination.
    pub async fn list_documents(
        &self,
        collection: &str,
    ) -> Result<Vec<RemoteDocument>, StorageError> {
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut url = format!(
                "{}/{}?pageSize=300",
                self.documents_url(),
                collection
            );
            if let Some(key) = self.config.api_key() {
                url.push_str(&format!("&key={key}"));
            }
            if let Some(token) = &page_token {
                url.push_str(&format!("&pageToken={token}"));
            }

            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|e| self.map_send_error(e))?;
            let response = Self::check_status(response).await?;

            let page: Value = response
                .json()
                .await
                .map_err(|e| StorageError::DeserializationFailed(e.to_string()))?;

            if let Some(items) = page.get("documents").and_then(Value::as_array) {
                for document in items {
                    let id = Self::document_id(document)?;
                    let fields = Self::decode_fields(document)?;
                    documents.push(RemoteDocument { id, fields });
                }
            }

            page_token = page
                .get("nextPageToken")
                .and_then(Value::as_str)
                .map(str::to_string);
            if page_token.is_none() {
                break;
            }
        }

        Ok(documents)
    }

    /// Extracts the document id from its full resource name.
    fn document_id(document: &Value) -> Result<String, StorageError> {
        document
            .get("name")
            .and_then(Value::as_str)
            .and_then(|name| name.rsplit('/').next())
            .map(str::to_string)
            .ok_or_else(|| {
                StorageError::DeserializationFailed("document has no resource name".into())
            })
    }

    /// Decodes a document's typed fields into plain JSON.
    fn decode_fields(document: &Value) -> Result<Value, StorageError> {
        match document.get("fields").and_then(Value::as_object) {
            Some(fields) => from_firestore_fields(fields),
            None => Ok(Value::Object(Map::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> FirestoreClient {
        FirestoreClient::new(
            FirestoreConfig::new("classroom-test")
                .with_api_key("test-key")
                .with_base_url("http://localhost:9099/v1"),
        )
        .unwrap()
    }

    #[test]
    fn test_document_url_shape() {
        let client = test_client();
        assert_eq!(
            client.document_url("teams", "lynx-rats-1"),
            "http://localhost:9099/v1/projects/classroom-test/databases/(default)/documents/teams/lynx-rats-1"
        );
    }

    #[test]
    fn test_with_key_appends_query() {
        let client = test_client();
        let url = client.with_key("http://x/doc".to_string());
        assert_eq!(url, "http://x/doc?key=test-key");
    }

    #[test]
    fn test_document_id_extraction() {
        let document = serde_json::json!({
            "name": "projects/p/databases/(default)/documents/submissions/abc-123"
        });
        assert_eq!(FirestoreClient::document_id(&document).unwrap(), "abc-123");
    }

    #[test]
    fn test_decode_missing_fields_is_empty_object() {
        let document = serde_json::json!({ "name": "projects/p/databases/(default)/documents/teams/x" });
        assert_eq!(
            FirestoreClient::decode_fields(&document).unwrap(),
            serde_json::json!({})
        );
    }
}
