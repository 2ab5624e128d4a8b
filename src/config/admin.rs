//! Admin gate configuration (username allow-list + PIN)

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;

/// Admin gate configuration.
///
/// This is a misclick guard for the scoring view, not a security boundary:
/// a fixed username allow-list plus a shared 4-digit PIN.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    /// Usernames allowed through the admin gate (comma-separated in the env)
    #[serde(default = "default_allowed_users")]
    pub allowed_users: String,

    /// Shared 4-digit PIN
    #[serde(default = "default_pin")]
    pub pin: Secret<String>,
}

impl AdminConfig {
    /// Allowed usernames as a vector.
    pub fn allowed_users_list(&self) -> Vec<String> {
        self.allowed_users
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Exposes the PIN (for the gate's comparison).
    pub fn pin(&self) -> &str {
        self.pin.expose_secret()
    }

    /// Validate admin configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.allowed_users_list().is_empty() {
            return Err(ValidationError::EmptyAllowList);
        }
        let pin = self.pin.expose_secret();
        if pin.len() != 4 || !pin.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidPin);
        }
        Ok(())
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            allowed_users: default_allowed_users(),
            pin: default_pin(),
        }
    }
}

fn default_allowed_users() -> String {
    "teacher,admin".to_string()
}

fn default_pin() -> Secret<String> {
    Secret::new("0000".to_string())
}
