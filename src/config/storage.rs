//! Storage configuration (remote document store + local fallback)

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;

/// Storage configuration.
///
/// The remote document store is optional: when `firestore_project_id` is
/// absent the service runs in local-only mode and persists everything under
/// `data_dir`.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Firestore project id (remote store disabled when unset)
    pub firestore_project_id: Option<String>,

    /// Firestore REST API key
    pub firestore_api_key: Option<Secret<String>>,

    /// Base URL for the Firestore REST API
    #[serde(default = "default_firestore_base_url")]
    pub firestore_base_url: String,

    /// Directory for the local fallback store
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Timeout for remote persistence calls, in seconds
    #[serde(default = "default_remote_timeout")]
    pub remote_timeout_secs: u64,
}

impl StorageConfig {
    /// Whether a remote document store is configured.
    pub fn is_remote_configured(&self) -> bool {
        self.firestore_project_id.is_some()
    }

    /// Timeout applied to every remote persistence call.
    pub fn remote_timeout(&self) -> Duration {
        Duration::from_secs(self.remote_timeout_secs)
    }

    /// Exposes the API key, if configured.
    pub fn api_key(&self) -> Option<&str> {
        self.firestore_api_key.as_ref().map(|k| k.expose_secret().as_str())
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.remote_timeout_secs == 0 || self.remote_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.firestore_api_key.is_some() && self.firestore_project_id.is_none() {
            return Err(ValidationError::IncompleteFirestoreConfig);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            firestore_project_id: None,
            firestore_api_key: None,
            firestore_base_url: default_firestore_base_url(),
            data_dir: default_data_dir(),
            remote_timeout_secs: default_remote_timeout(),
        }
    }
}

fn default_firestore_base_url() -> String {
    "https://firestore.googleapis.com/v1".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_remote_timeout() -> u64 {
    10
}
